use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    let args = prepay_journal::args::parse();
    prepay_journal::cli::main(args)
}
