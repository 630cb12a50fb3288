// Player starting stats
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_EXPERIENCE: u64 = 0;
pub const STARTING_ATTACK: u32 = 20;
pub const STARTING_DEFENSE: u32 = 5;
pub const STARTING_HP: u32 = 100;
pub const DEFAULT_PLAYER_ID: &str = "player1";
pub const DEFAULT_PLAYER_NAME: &str = "Adventurer";

// Per-level stat gains
pub const ATTACK_PER_LEVEL: u32 = 3;
pub const DEFENSE_PER_LEVEL: u32 = 2;
pub const HP_PER_LEVEL: u32 = 10;

// XP curve: floor(XP_CURVE_BASE * level^XP_CURVE_EXPONENT)
pub const XP_CURVE_BASE: f64 = 100.0;
pub const XP_CURVE_EXPONENT: f64 = 1.5;

// Inventory
pub const INVENTORY_SIZE: usize = 50;

// Damage floor shared by both attacker roles
pub const MIN_DAMAGE: u32 = 1;

// Encounter gates
pub const MIN_ENCOUNTER_DISTANCE_METERS: f64 = 50.0;
pub const ENCOUNTER_CHANCE_PER_METER: f64 = 0.001;
pub const MIN_TIME_BETWEEN_ENCOUNTERS_MS: i64 = 30_000;

// Creature generation
pub const CREATURE_LEVEL_VARIANCE: i32 = 2;
pub const CREATURE_STAT_GROWTH_PER_LEVEL: f64 = 0.1;
pub const CREATURE_BASE_XP_PER_LEVEL: f64 = 10.0;

// Loot
pub const BASE_LOOT_DROP_CHANCE: f64 = 0.3;

// Attack table: (damage multiplier, cooldown ms)
pub const BASIC_ATTACK: (f64, i64) = (1.0, 1_000);
pub const STRONG_ATTACK: (f64, i64) = (1.5, 3_000);
pub const HEAVY_ATTACK: (f64, i64) = (2.0, 5_000);

// Fallback coordinates used by debug encounters when no GPS fix exists yet
pub const FALLBACK_LATITUDE: f64 = 37.7749;
pub const FALLBACK_LONGITUDE: f64 = -122.4194;
