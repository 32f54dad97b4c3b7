use super::*;

/// Tests creating a veterinarian with languages.
///
/// Verifies that languages are stored in the comma separated column and read back
/// in order.
///
/// Expected: Ok with languages round tripped and the column holding "English,Mandarin"
#[tokio::test]
async fn creates_veterinarian_with_languages() -> Result<(), DbErr> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let veterinarian = VeterinarianRepository::new(db)
        .create(
            CreateVeterinarianParams {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                email: "jane.doe@vet.com".to_string(),
                password: "Password1!".to_string(),
                description: Some("Cats".to_string()),
                sex: Sex::Female,
                languages: vec![Language::English, Language::Mandarin],
                is_admin: false,
            },
            "hashed".to_string(),
        )
        .await?;

    assert_eq!(
        veterinarian.languages,
        vec![Language::English, Language::Mandarin]
    );
    assert_eq!(veterinarian.description.as_deref(), Some("Cats"));
    assert!(!veterinarian.is_admin);

    let stored = entity::prelude::Veterinarian::find_by_id(veterinarian.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.languages.as_deref(), Some("English,Mandarin"));

    Ok(())
}

/// Tests that an empty language list is stored as NULL.
///
/// Expected: Ok with NULL languages column
#[tokio::test]
async fn stores_empty_languages_as_null() -> Result<(), DbErr> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let veterinarian = VeterinarianRepository::new(db)
        .create(
            CreateVeterinarianParams {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                email: "jane.doe@vet.com".to_string(),
                password: "Password1!".to_string(),
                description: None,
                sex: Sex::Female,
                languages: vec![],
                is_admin: true,
            },
            "hashed".to_string(),
        )
        .await?;

    let stored = entity::prelude::Veterinarian::find_by_id(veterinarian.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.languages.is_none());
    assert!(stored.description.is_none());
    assert!(stored.is_admin);

    Ok(())
}
