use super::*;

/// Tests a partial update of languages and sex.
///
/// Expected: Ok with new values and untouched name
#[tokio::test]
async fn updates_languages() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let veterinarian = factory::create_veterinarian(db).await?;

    let updated = VeterinarianService::new(db)
        .update(UpdateVeterinarianParams {
            id: veterinarian.id,
            first_name: None,
            last_name: None,
            email: None,
            password: None,
            description: None,
            sex: Some(Sex::Male),
            languages: Some(vec![Language::Korean, Language::Japanese]),
            is_admin: None,
        })
        .await?;

    assert_eq!(updated.first_name, veterinarian.first_name);
    assert_eq!(updated.sex, Sex::Male);
    assert_eq!(
        updated.languages,
        vec![Language::Korean, Language::Japanese]
    );

    Ok(())
}
