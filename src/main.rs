pub mod compute;
pub mod error;
pub mod read_to_end_sequential;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    read_to_end_sequential::main()
}
