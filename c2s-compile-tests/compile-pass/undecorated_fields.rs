use c2s::prelude::*;

// Undecorated fields and example-only fields stay out of the schema.
#[derive(DtoSchema)]
pub struct SessionDto {
    #[property(description = "Session token")]
    pub token: String,

    pub created_at: u64,

    #[example("never rendered")]
    pub internal: String,
}

fn main() {
    assert_eq!(SessionDto::fields().len(), 1);
}
