use holocron::{
    model::people::{CreateCharacterDto, UpdateCharacterDto},
    server::controller::people::{
        create_character, delete_character, get_character, list_people, update_character,
    },
};

use super::*;

fn luke() -> CreateCharacterDto {
    CreateCharacterDto {
        name: Some("Luke Skywalker".to_string()),
        gender: Some("male".to_string()),
        species: Some("Human".to_string()),
    }
}

/// Expect 201 with the created character and its assigned ID
#[tokio::test]
async fn create_character_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = create_character(State(test.into_app_state()), Ok(Json(luke())))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(resp).await,
        json!({"id": 1, "name": "Luke Skywalker", "gender": "male", "species": "Human"})
    );

    Ok(())
}

/// Expect 400 "Faltan datos" when a field is missing
#[tokio::test]
async fn create_character_missing_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = create_character(
        State(test.into_app_state()),
        Ok(Json(CreateCharacterDto {
            gender: None,
            ..luke()
        })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await, json!({"msg": "Faltan datos"}));

    Ok(())
}

/// Expect 200 with characters in creation order
#[tokio::test]
async fn list_people_in_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_character("Han")
        .with_mock_character("Chewbacca")
        .build()
        .await?;

    let resp = list_people(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body[0]["name"], "Han");
    assert_eq!(body[1]["name"], "Chewbacca");

    Ok(())
}

/// Expect 404 "Personaje no encontrado" for a character that does not exist
#[tokio::test]
async fn get_character_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = get_character(State(test.into_app_state()), PathId(4))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        json!({"msg": "Personaje no encontrado"})
    );

    Ok(())
}

/// Expect 200 with only the supplied field changed
#[tokio::test]
async fn update_character_partial() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_character("Rey")
        .build()
        .await?;

    let resp = update_character(
        State(test.into_app_state()),
        PathId(1),
        Ok(Json(UpdateCharacterDto {
            gender: Some("female".to_string()),
            species: Some("Human (Palpatine line)".to_string()),
            ..Default::default()
        })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({"id": 1, "name": "Rey", "gender": "female", "species": "Human (Palpatine line)"})
    );

    Ok(())
}

/// Expect 200 with a message, then 404 for the deleted character
#[tokio::test]
async fn delete_character_then_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_character("Jar Jar")
        .build()
        .await?;

    let resp = delete_character(State(test.into_app_state()), PathId(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({"msg": "Personaje eliminado con éxito"})
    );

    let resp = get_character(State(test.into_app_state()), PathId(1))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
