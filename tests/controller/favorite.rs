use holocron::{
    model::favorite::FavoriteRequestDto,
    server::controller::favorite::{
        add_favorite_character, add_favorite_planet, remove_favorite_character,
        remove_favorite_planet,
    },
};

use super::*;

fn body(user_id: Option<i32>) -> holocron::server::controller::util::FavoriteRequestBody {
    Ok(Some(Json(FavoriteRequestDto { user_id })))
}

/// Expect 200 with a confirmation message
#[tokio::test]
async fn add_favorite_character_ok() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user("luke")
        .with_mock_character("Leia")
        .build()
        .await?;

    let resp = add_favorite_character(State(test.into_app_state()), PathId(1), body(Some(1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({"msg": "Se añadió el personaje a favoritos"})
    );

    Ok(())
}

/// Expect 400 "Usuario Id requerido" for a body without user_id
#[tokio::test]
async fn add_favorite_missing_user_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_planet("Hoth")
        .build()
        .await?;

    let resp = add_favorite_planet(State(test.into_app_state()), PathId(1), body(None))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await, json!({"msg": "Usuario Id requerido"}));

    Ok(())
}

/// Expect 400 "Usuario Id requerido" when no body was sent
#[tokio::test]
async fn add_favorite_without_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = add_favorite_character(State(test.into_app_state()), PathId(1), Ok(None))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await, json!({"msg": "Usuario Id requerido"}));

    Ok(())
}

/// Expect 404 "Usuario no encontrado" before the target is checked
#[tokio::test]
async fn add_favorite_user_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = add_favorite_planet(State(test.into_app_state()), PathId(1), body(Some(3)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({"msg": "Usuario no encontrado"}));

    Ok(())
}

/// Expect 404 "Planeta no encontrado" for a planet that does not exist
#[tokio::test]
async fn add_favorite_planet_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user("luke")
        .build()
        .await?;

    let resp = add_favorite_planet(State(test.into_app_state()), PathId(1), body(Some(1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({"msg": "Planeta no encontrado"}));

    Ok(())
}

/// Expect 400 "El planeta ya está en favoritos" on the second add
#[tokio::test]
async fn add_favorite_planet_duplicate() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user("luke")
        .with_mock_planet("Hoth")
        .build()
        .await?;

    let first = add_favorite_planet(State(test.into_app_state()), PathId(1), body(Some(1)))
        .await
        .into_response();
    let second = add_favorite_planet(State(test.into_app_state()), PathId(1), body(Some(1)))
        .await
        .into_response();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(second).await,
        json!({"msg": "El planeta ya está en favoritos"})
    );

    Ok(())
}

/// Expect 200 when removing an existing favorite
#[tokio::test]
async fn remove_favorite_planet_ok() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user("luke")
        .with_mock_planet("Hoth")
        .build()
        .await?;
    test.favorite().insert_planet_favorite(1, 1).await?;

    let resp = remove_favorite_planet(State(test.into_app_state()), PathId(1), body(Some(1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({"msg": "Planeta eliminado de favoritos"})
    );

    Ok(())
}

/// Expect 404 "El personaje no está en favoritos" for a character that is not a favorite
#[tokio::test]
async fn remove_favorite_character_not_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user("luke")
        .with_mock_character("Leia")
        .build()
        .await?;

    let resp = remove_favorite_character(State(test.into_app_state()), PathId(1), body(Some(1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        json!({"msg": "El personaje no está en favoritos"})
    );

    Ok(())
}
