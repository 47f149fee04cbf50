use c2s::prelude::*;

#[derive(DtoSchema)]
pub struct UserDto {
    #[property(description = "ID of user")]
    #[example("1562")]
    pub id: u64,

    #[property(description = "Username of user")]
    pub username: String,
}

fn main() {
    assert_eq!(UserDto::dto_name(), "UserDto");
    assert_eq!(UserDto::fields().len(), 2);
}
