use voids_utils::settings::structs::Settings;

fn main() {
  println!("{}", Settings::documented_defaults())
}
