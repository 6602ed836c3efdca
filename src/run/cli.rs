use anyhow::Result;

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("sitecost {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown argument: {other}");
        }
    }
}

fn print_usage() {
    println!("SiteCost - local-only construction expense tracker");
    println!();
    println!("Usage: sitecost [option]");
    println!();
    println!("Options:");
    println!("  (none)                        Launch interactive TUI");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Data is kept in sitecost.db under the platform data directory.");
    println!("Logs go to sitecost.log next to it; set RUST_LOG=sitecost=debug for more.");
}
