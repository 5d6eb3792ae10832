//! campus CLI entry point.

use anyhow::Result;

fn main() -> Result<()> {
    campus_cli::run()
}
