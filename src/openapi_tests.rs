use crate::schemas::ApiDoc;
use utoipa::openapi::{schema::Schema, PathItemType, RefOr};
use utoipa::OpenApi;

fn object_properties(name: &str) -> Vec<String> {
    let openapi = ApiDoc::openapi();
    let components = openapi.components.expect("components are generated");
    match components.schemas.get(name) {
        Some(RefOr::T(Schema::Object(obj))) => obj.properties.keys().cloned().collect(),
        _ => panic!("{} should be an object schema", name),
    }
}

#[test]
fn test_openapi_schema_generation() {
    let openapi = ApiDoc::openapi();

    let components = openapi.components.as_ref().unwrap();
    for name in [
        "ErrorResponse",
        "HealthResponse",
        "OrderView",
        "CreateUserRequest",
        "UpdateUserRequest",
        "UserResponse",
        "CartResponse",
    ] {
        assert!(components.schemas.contains_key(name), "missing schema {}", name);
    }

    assert!(serde_json::to_string(&openapi).is_ok());
}

#[test]
fn test_error_response_schema_structure() {
    let properties = object_properties("ErrorResponse");
    for field in ["error", "code", "success"] {
        assert!(properties.contains(&field.to_string()));
    }
}

#[test]
fn test_order_view_schema_structure() {
    let properties = object_properties("OrderView");
    for field in [
        "id",
        "delivery_method",
        "delivery_address",
        "value",
        "order_date_time",
        "user_id",
        "cart_id",
    ] {
        assert!(properties.contains(&field.to_string()), "missing field {}", field);
    }
}

#[test]
fn test_user_response_does_not_expose_password() {
    let properties = object_properties("UserResponse");
    assert!(properties.contains(&"login".to_string()));
    assert!(!properties.contains(&"password".to_string()));
}

#[test]
fn test_order_paths_are_documented() {
    let openapi = ApiDoc::openapi();
    let paths = &openapi.paths.paths;

    let collection = paths.get("/v1/orders").expect("/v1/orders is documented");
    for method in [PathItemType::Get, PathItemType::Post, PathItemType::Put] {
        assert!(collection.operations.contains_key(&method));
    }

    let single = paths
        .get("/v1/orders/{order_id}")
        .expect("/v1/orders/{order_id} is documented");
    assert!(single.operations.contains_key(&PathItemType::Get));

    let delete = single
        .operations
        .get(&PathItemType::Delete)
        .expect("delete is documented");
    assert!(delete.responses.responses.contains_key("204"));
}

#[test]
fn test_health_endpoint_is_documented() {
    let openapi = ApiDoc::openapi();
    let health = openapi.paths.paths.get("/health").unwrap();
    let get = health.operations.get(&PathItemType::Get).unwrap();
    assert!(get.responses.responses.contains_key("200"));
    assert!(get.responses.responses.contains_key("500"));
}

#[test]
fn test_error_responses_reference_component_schema() {
    let openapi_json = serde_json::to_string(&ApiDoc::openapi()).unwrap();

    assert!(!openapi_json.contains("crate.schemas.ErrorResponse"));
    assert!(openapi_json.contains("#/components/schemas/ErrorResponse"));
}
