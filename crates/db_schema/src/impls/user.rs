use crate::{
  newtypes::UserId,
  schema::user_::dsl::{email, user_, username},
  source::user::{User, UserInsertForm},
  traits::Crud,
};
use bcrypt::{hash, DEFAULT_COST};
use diesel::{
  delete,
  dsl::{exists, insert_into},
  result::Error,
  select,
  ExpressionMethods,
  QueryDsl,
  RunQueryDsl,
  SqliteConnection,
};

impl Crud for User {
  type InsertForm = UserInsertForm;
  type IdType = UserId;

  fn create(conn: &mut SqliteConnection, form: &UserInsertForm) -> Result<Self, Error> {
    let password_hash = hash(&form.password_encrypted, DEFAULT_COST)
      .map_err(|e| Error::QueryBuilderError(e.into()))?;
    let form_with_encrypted_password = UserInsertForm {
      password_encrypted: password_hash,
      ..form.clone()
    };

    insert_into(user_)
      .values(form_with_encrypted_password)
      .get_result::<Self>(conn)
  }

  fn read(conn: &mut SqliteConnection, user_id: UserId) -> Result<Self, Error> {
    user_.find(user_id).first::<Self>(conn)
  }

  fn delete(conn: &mut SqliteConnection, user_id: UserId) -> Result<usize, Error> {
    delete(user_.find(user_id)).execute(conn)
  }
}

impl User {
  pub fn read_from_name(conn: &mut SqliteConnection, name: &str) -> Result<Self, Error> {
    user_.filter(username.eq(name)).first::<Self>(conn)
  }

  pub fn is_username_taken(conn: &mut SqliteConnection, name: &str) -> Result<bool, Error> {
    select(exists(user_.filter(username.eq(name)))).get_result(conn)
  }

  pub fn is_email_taken(conn: &mut SqliteConnection, email_: &str) -> Result<bool, Error> {
    select(exists(user_.filter(email.eq(email_)))).get_result(conn)
  }

  /// Compares a plain text password against the stored hash.
  pub fn verify_password(&self, password: &str) -> bool {
    bcrypt::verify(password, &self.password_encrypted).unwrap_or(false)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]

  use crate::{
    source::user::{User, UserInsertForm},
    traits::Crud,
    utils::{establish_unpooled_connection, is_unique_violation},
  };
  use pretty_assertions::assert_eq;

  #[test]
  fn test_crud() {
    let conn = &mut establish_unpooled_connection();

    let new_user = UserInsertForm::new(
      "thommy".into(),
      "thommy@voids.example".into(),
      "correct horse battery".into(),
    );
    let inserted_user = User::create(conn, &new_user).unwrap();

    assert_eq!("thommy", inserted_user.username);
    assert_eq!(Some(0), inserted_user.karma);
    assert_eq!(None, inserted_user.awards);
    assert_ne!("correct horse battery", inserted_user.password_encrypted);
    assert!(inserted_user.verify_password("correct horse battery"));
    assert!(!inserted_user.verify_password("wrong horse battery"));

    let read_user = User::read(conn, inserted_user.id).unwrap();
    let read_by_name = User::read_from_name(conn, "thommy").unwrap();
    assert_eq!(inserted_user, read_user);
    assert_eq!(inserted_user, read_by_name);

    assert!(User::is_username_taken(conn, "thommy").unwrap());
    assert!(User::is_email_taken(conn, "thommy@voids.example").unwrap());
    assert!(!User::is_username_taken(conn, "sara").unwrap());

    let num_deleted = User::delete(conn, inserted_user.id).unwrap();
    assert_eq!(1, num_deleted);
    assert!(matches!(
      User::read_from_name(conn, "thommy"),
      Err(diesel::NotFound)
    ));
  }

  #[test]
  fn duplicate_username_is_a_unique_violation() {
    let conn = &mut establish_unpooled_connection();

    let form = UserInsertForm::new(
      "sara".into(),
      "sara@voids.example".into(),
      "hunter2hunter2".into(),
    );
    User::create(conn, &form).unwrap();

    let same_name = UserInsertForm {
      email: "other@voids.example".into(),
      ..form
    };
    let err = User::create(conn, &same_name).unwrap_err();
    assert!(is_unique_violation(&err));
  }
}
