/// Cluster this build targets.
pub const CLUSTER: &str = "devnet";

/// Ordered RPC endpoints. The failover ratchet walks this list forward only.
pub const DEFAULT_ENDPOINTS: [&str; 3] = [
    "https://api.devnet.solana.com",
    "https://devnet.helius-rpc.com",
    "https://rpc.ankr.com/solana_devnet",
];

/// SOL treasury destination used when a payment guard carries no explicit one.
pub const TREASURY_DESTINATION: &str = "9mG7vEEABrX5X4mg9WCAa17XpCxR28Ute2iEaDbHTJtD";

/// Candy machine accounts, one per tier (devnet deployment).
pub const MACHINE_LITTLEGEN: &str = "Hr9YzscC71vdHifZR4jRvMd8JmmGxbJrS6j7QckEVqKy";
pub const MACHINE_BIGGEN: &str = "Ewhn2nJV6tbvq59GMahyWmS54jQWL4n3mrsoVM8n8GHH";
pub const MACHINE_LITTLEGEN_DIAMOND: &str = "8L5MLvbvM9EsZ8nb1NAwqzEXuVsiq5x5fHGNKchz6UQR";
pub const MACHINE_BIGGEN_DIAMOND: &str = "EyjoAcKwkfNo8NqCZczHHnNSi3ccYpnCetkBUwbqCien";

/// Smallest-unit scale of the ledger (1 SOL = 10^9 lamports).
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Compute-budget directive prepended to every submission.
pub const COMPUTE_UNIT_LIMIT: u32 = 800_000;

/// Pause between failover attempts.
pub const FAILOVER_PAUSE_MS: u64 = 80;

/// Pause between sequential mint submissions.
pub const INTER_MINT_PAUSE_MS: u64 = 400;

/// Per-wallet quantity cap applied when the guards carry no mint limit.
pub const DEFAULT_RECOMMENDED_LIMIT: u64 = 5;

/// Universal fallback group label scanned after all tier-specific candidates.
pub const FALLBACK_GROUP_LABEL: &str = "default";

/// Preference key holding the last selected tier's raw identifier.
pub const SELECTED_TIER_KEY: &str = "selected_tier";
