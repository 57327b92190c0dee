pub mod validation;

use rand::{thread_rng, Rng};

/// A username suggestion for the signup form, like `quiet_void_4821`.
pub fn generate_random_username() -> String {
  const ADJECTIVES: [&str; 8] = [
    "quiet", "hollow", "cosmic", "silent", "vast", "dark", "empty", "endless",
  ];
  const NOUNS: [&str; 6] = ["void", "abyss", "orbit", "nebula", "echo", "drift"];
  let mut rng = thread_rng();
  format!(
    "{}_{}_{}",
    ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())],
    NOUNS[rng.gen_range(0..NOUNS.len())],
    rng.gen_range(1000..10000)
  )
}
