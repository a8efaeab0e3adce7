pub mod generator;
pub mod modular;
pub mod prime_search;
pub mod primality;

pub use generator::{find_generator, GeneratorRule, GENERATOR_SEED};
pub use modular::power_mod;
pub use prime_search::{random_prime, safe_prime, SearchBudget};
pub use primality::{is_prime, witness, PRIMALITY_ROUNDS};
