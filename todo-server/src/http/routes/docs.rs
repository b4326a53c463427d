//! API description endpoints
//!
//! Serves a Swagger 2.0 document for the item routes and a browsing page
//! that renders it.

use axum::{response::Html, routing::get, Json, Router};
use serde_json::{json, Value};

pub const SWAGGER_JSON_PATH: &str = "/swagger/v1/swagger.json";

/// Build the Swagger 2.0 document for the item API.
pub fn swagger_document() -> Value {
    let item_body = json!({
        "in": "body",
        "name": "body",
        "required": true,
        "schema": { "$ref": "#/definitions/Item" }
    });
    let id_param = json!({
        "in": "path",
        "name": "id",
        "required": true,
        "type": "integer",
        "format": "int32"
    });

    json!({
        "swagger": "2.0",
        "info": {
            "title": "Items",
            "version": "v1",
            "description": "An API for managing ToDo items",
            "termsOfService": "http://localhost:5144/",
            "contact": {
                "name": "Example Contact",
                "url": "http://localhost:5144/"
            },
            "license": {
                "name": "Example License",
                "url": "http://localhost:5144/"
            }
        },
        "consumes": ["application/json"],
        "produces": ["application/json"],
        "paths": {
            "/items": {
                "get": {
                    "tags": ["Items"],
                    "responses": {
                        "200": {
                            "description": "All items",
                            "schema": {
                                "type": "array",
                                "items": { "$ref": "#/definitions/Item" }
                            }
                        }
                    }
                },
                "post": {
                    "tags": ["Items"],
                    "parameters": [item_body.clone()],
                    "responses": {
                        "201": {
                            "description": "Created",
                            "schema": { "$ref": "#/definitions/Item" }
                        },
                        "400": { "description": "Invalid item data" }
                    }
                }
            },
            "/items/{id}": {
                "put": {
                    "tags": ["Items"],
                    "parameters": [id_param.clone(), item_body],
                    "responses": {
                        "200": {
                            "description": "Updated",
                            "schema": { "$ref": "#/definitions/Item" }
                        },
                        "400": { "description": "Invalid item data" },
                        "404": { "description": "Item not found" }
                    }
                },
                "delete": {
                    "tags": ["Items"],
                    "parameters": [id_param],
                    "responses": {
                        "200": { "description": "Item deleted successfully" },
                        "404": { "description": "Item not found" }
                    }
                }
            }
        },
        "definitions": {
            "Item": {
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "format": "int32", "readOnly": true },
                    "name": { "type": "string", "x-nullable": true, "maxLength": 100 },
                    "isComplete": { "type": "boolean", "default": false }
                }
            }
        }
    })
}

/// GET /swagger/v1/swagger.json
async fn swagger_json() -> Json<Value> {
    Json(swagger_document())
}

/// GET / - interactive API browser
async fn swagger_ui() -> Html<String> {
    Html(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Items</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({{ url: "{SWAGGER_JSON_PATH}", dom_id: "#swagger-ui" }});
  </script>
</body>
</html>
"##
    ))
}

/// Docs routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(swagger_ui))
        .route(SWAGGER_JSON_PATH, get(swagger_json))
}
