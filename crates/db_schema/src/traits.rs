use diesel::{result::Error, SqliteConnection};

pub trait Crud {
  type InsertForm;
  type IdType;
  fn create(conn: &mut SqliteConnection, form: &Self::InsertForm) -> Result<Self, Error>
  where
    Self: Sized;
  fn read(conn: &mut SqliteConnection, id: Self::IdType) -> Result<Self, Error>
  where
    Self: Sized;
  fn delete(conn: &mut SqliteConnection, id: Self::IdType) -> Result<usize, Error>
  where
    Self: Sized;
}
