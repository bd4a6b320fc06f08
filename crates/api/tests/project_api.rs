//! HTTP-level integration tests for projects and their history.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_project, delete, get, post_json, project_body, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_duplicate_name_is_409(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/projeto",
        project_body("Projeto A", "PA1", 100.0),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["id"].is_number());
    assert_eq!(json["data"]["sigla"], "PA1");
    assert_eq!(json["data"]["historico"], serde_json::json!([]));
    assert!(json["mensagem"].is_string());

    let response = post_json(
        common::build_test_app(pool),
        "/projeto",
        project_body("Projeto A", "PA2", 50.0),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "DUPLICATE_KEY");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_invalid_acronym_is_400(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/projeto",
        project_body("Projeto A", "abc", 100.0),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_missing_field_is_400(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/projeto",
        serde_json::json!({"nome": "Sem sigla"}),
    )
    .await;
    assert!(response.status().is_client_error());
    assert!(body_json(response).await["error"].is_string());
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_and_list_include_history(pool: PgPool) {
    let id = create_project(&pool, "Projeto A", "PA1").await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/historico?id={id}"),
        serde_json::json!({"descricao": "Kickoff"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(common::build_test_app(pool.clone()), &format!("/projeto?id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["nome"], "Projeto A");
    assert_eq!(json["data"]["historico"][0]["descricao"], "Kickoff");

    let response = get(common::build_test_app(pool), "/projetos").await;
    let json = body_json(response).await;
    let projects = json["data"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["historico"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_project_is_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/projeto?id=999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_id_is_400(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/projeto?id=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_negative_cost_edit_is_400_and_leaves_cost(pool: PgPool) {
    let id = create_project(&pool, "Projeto A", "PA1").await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        "/projeto",
        serde_json::json!({"id": id, "custo": -5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(common::build_test_app(pool), &format!("/projeto?id={id}")).await;
    assert_eq!(body_json(response).await["data"]["custo"], 100.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_edit_keeps_other_fields(pool: PgPool) {
    let id = create_project(&pool, "Projeto A", "PA1").await;

    let response = put_json(
        common::build_test_app(pool),
        "/projeto",
        serde_json::json!({"id": id, "status": "Concluido"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "Concluido");
    assert_eq!(json["data"]["nome"], "Projeto A");
    assert_eq!(json["data"]["custo"], 100.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_edit_to_taken_name_or_acronym_is_400(pool: PgPool) {
    create_project(&pool, "Projeto A", "PA1").await;
    let id = create_project(&pool, "Projeto B", "PB1").await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        "/projeto",
        serde_json::json!({"id": id, "sigla": "PA1"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    let response = put_json(
        common::build_test_app(pool.clone()),
        "/projeto",
        serde_json::json!({"id": id, "nome": "Projeto A"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(common::build_test_app(pool), &format!("/projeto?id={id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["nome"], "Projeto B");
    assert_eq!(json["data"]["sigla"], "PB1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_edit_missing_project_is_404(pool: PgPool) {
    let response = put_json(
        common::build_test_app(pool),
        "/projeto",
        serde_json::json!({"id": 999999, "status": "Concluido"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_removes_history_and_links(pool: PgPool) {
    let id = create_project(&pool, "Projeto A", "PA1").await;
    let resource_id = common::create_resource(&pool, "Ana", "Dev").await;
    post_json(
        common::build_test_app(pool.clone()),
        &format!("/historico?id={id}"),
        serde_json::json!({"descricao": "Kickoff"}),
    )
    .await;
    common::post(
        common::build_test_app(pool.clone()),
        &format!("/projeto/recurso?id_projeto={id}&id_recurso={resource_id}"),
    )
    .await;

    let response = delete(common::build_test_app(pool.clone()), &format!("/projeto?id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["historicos_removidos"], 1);
    assert_eq!(json["data"]["vinculos_removidos"], 1);

    let response = get(common::build_test_app(pool.clone()), &format!("/projeto?id={id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The linked resource survives.
    let response = get(
        common::build_test_app(pool),
        &format!("/recurso?id={resource_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_project_is_404(pool: PgPool) {
    let response = delete(common::build_test_app(pool), "/projeto?id=999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_history_listing(pool: PgPool) {
    let id = create_project(&pool, "Projeto A", "PA1").await;
    for description in ["Kickoff", "Entrega 1"] {
        post_json(
            common::build_test_app(pool.clone()),
            &format!("/historico?id={id}"),
            serde_json::json!({"descricao": description}),
        )
        .await;
    }

    let response = get(common::build_test_app(pool), &format!("/historico?id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["projeto_id"], id);
    let entries = json["data"]["historico"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["descricao"], "Kickoff");
    assert_eq!(entries[1]["descricao"], "Entrega 1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_history_for_missing_project_is_404(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/historico?id=999999",
        serde_json::json!({"descricao": "Orfao"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(common::build_test_app(pool), "/historico?id=999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_history_is_400(pool: PgPool) {
    let id = create_project(&pool, "Projeto A", "PA1").await;
    let response = post_json(
        common::build_test_app(pool),
        &format!("/historico?id={id}"),
        serde_json::json!({"descricao": "   "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}
