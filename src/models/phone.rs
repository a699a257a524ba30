/// A row of the `phones` table
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Phone {
    pub client_id: i32,
    pub phone: String,
}
