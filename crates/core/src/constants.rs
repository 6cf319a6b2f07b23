/// Storage key holding the farmer profile snapshot.
pub const PROFILE_STORAGE_KEY: &str = "agrifin_user";

/// Storage key holding the loan application ledger snapshot.
pub const LOANS_STORAGE_KEY: &str = "agrifin_loans";

/// Storage key holding the insurance policy ledger snapshot.
pub const INSURANCES_STORAGE_KEY: &str = "agrifin_insurances";

/// Minimum number of (trimmed) characters in a loan purpose.
pub const MIN_LOAN_PURPOSE_LENGTH: usize = 5;

/// Length of every insurance policy, in calendar months.
pub const POLICY_TERM_MONTHS: u32 = 6;

/// Prefix of human-readable policy numbers.
pub const POLICY_NUMBER_PREFIX: &str = "POL";

/// Display name used when a loan is reviewed without a registered profile.
pub const UNKNOWN_FARMER_NAME: &str = "Unknown Farmer";

/// Farmer id used when a loan is reviewed without a registered profile.
pub const UNKNOWN_FARMER_ID: &str = "Unknown ID";
