//! Meta-progression: souls banked across runs and the Soul Altar upgrades
//! they buy.

pub mod logic;
pub mod persistence;
pub mod types;

pub use logic::{bank_souls, can_afford, try_buy_upgrade, upgrade_bonus, upgrade_level};
pub use persistence::{load_meta, load_meta_from, meta_save_path, save_meta, save_meta_to};
pub use types::{GameUpgrade, MetaProgress, UpgradeError, UpgradeId, UPGRADES};
