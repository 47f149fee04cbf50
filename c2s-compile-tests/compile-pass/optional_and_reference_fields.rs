use c2s::prelude::*;

#[derive(DtoSchema)]
pub struct ProfileDto {
    #[property(description = "Display name")]
    pub display_name: Option<String>,

    #[property]
    pub age: Option<u8>,

    #[property]
    pub motto: &'static str,
}

fn main() {
    let kinds: Vec<FieldKind> = ProfileDto::fields().iter().map(|f| f.kind).collect();
    assert_eq!(kinds, [FieldKind::String, FieldKind::Integer, FieldKind::String]);
}
