//! Word pool overview command

use crate::output::print_pool;
use crate::wordlists::WordPool;

/// Print the tiers of `pool` with their tries and hint prices
pub fn run_pool(pool: &WordPool) {
    print_pool(pool);
    println!(
        "\n  {} tiers, {} words in total",
        pool.tiers().len(),
        pool.tiers().iter().map(|tier| tier.len()).sum::<usize>()
    );
}
