// The derive resolves paths through the facade here, but a manual impl
// against c2s-core types must keep compiling side by side.
use c2s::prelude::*;

pub struct ManualDto;

impl DtoSchema for ManualDto {
    fn dto_name() -> &'static str {
        "ManualDto"
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[FieldSpec {
            name: "id",
            kind: FieldKind::Integer,
            description: None,
            example: None,
        }];
        FIELDS
    }
}

#[derive(DtoSchema)]
pub struct DerivedDto {
    #[property]
    pub id: u64,
}

fn main() {
    let mut registry = PropertyRegistry::new();
    registry.register::<ManualDto>();
    registry.register::<DerivedDto>();
    assert!(registry.contains("ManualDto"));
    assert!(registry.contains("DerivedDto"));
}
