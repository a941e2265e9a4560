//! Models command implementation.

use ronda_score::available_models;

/// List the built-in models.
pub(crate) fn list_models(verbose: bool) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Available Models                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    for info in available_models() {
        if verbose {
            println!("{}", info.name);
            println!("{}", "-".repeat(60));
            println!("  {}", info.description);
            println!("  Components: {}", info.components.join(", "));
            println!(
                "  Fundamentals: {}",
                if info.requires_fundamentals {
                    "required"
                } else {
                    "not used"
                }
            );
            println!();
        } else {
            println!("  {:<18} - {}", info.name, info.description);
        }
    }

    if !verbose {
        println!("\nUse --verbose for component details.");
    }

    println!("\nModel aliases:");
    println!("  qm, quality   -> quality_momentum");
    println!("  ts, trend     -> trend_strength");
    println!("  mr, reversion -> mean_reversion");
    println!();
}
