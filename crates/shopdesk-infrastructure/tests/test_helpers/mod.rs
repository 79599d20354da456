//! A small in-process stand-in for the shop backend.

use axum::extract::Path;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde_json::{json, Value};

pub const VALID_TOKEN: &str = "jwt-abc";

/// Start the fake backend on an ephemeral port and return its base URL.
pub async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/category", get(list_categories))
        .route("/category/create", post(create_category))
        .route("/category/update", patch(echo))
        .route("/category/{id}", delete(delete_quietly))
        .route("/subcategory", get(empty_object))
        .route("/productos", get(list_products))
        .route("/productos/{id}", get(get_product).delete(delete_product))
        .route("/proveedor", get(empty_object))
        .route("/pedidos", get(list_orders))
        .route("/ventas/mensuales", get(server_error))
        .route("/auth/login", post(login))
        .route("/auth/signup", post(signup));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test backend");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    format!("http://{addr}")
}

async fn list_categories() -> Json<Value> {
    Json(json!([
        {"id": 1, "nombreCategoria": "Bebidas", "estado": true},
        {"id": 2, "nombreCategoria": "Lácteos", "estado": 0},
        {"id": 3, "nombreCategoria": "Aseo", "estado": "activo"}
    ]))
}

async fn create_category(Json(body): Json<Value>) -> Json<Value> {
    let mut created = body;
    created["id"] = json!(10);
    Json(created)
}

async fn echo(Json(body): Json<Value>) -> Json<Value> {
    Json(body)
}

async fn delete_quietly(Path(_id): Path<i64>) -> StatusCode {
    StatusCode::OK
}

async fn empty_object() -> Json<Value> {
    Json(json!({}))
}

async fn list_products() -> Json<Value> {
    Json(json!({
        "items": [
            {"id": 1, "nombre": "Café", "descripcion": "Café molido 500g", "precio": 18000, "cantidadStock": 4, "categoriaId": 1},
            {"id": 2, "nombre": "Leche", "descripcion": "Leche entera", "precio": 4200.5, "cantidadStock": null}
        ],
        "total": 2
    }))
}

async fn get_product(Path(id): Path<i64>) -> Response {
    if id == 999 {
        return (StatusCode::NOT_FOUND, "Producto no encontrado").into_response();
    }
    Json(json!({"id": id, "nombre": "Café", "descripcion": "Café molido 500g", "precio": 18000, "cantidadStock": 4}))
        .into_response()
}

async fn delete_product(Path(id): Path<i64>) -> String {
    format!("Producto {id} eliminado")
}

async fn list_orders(headers: HeaderMap) -> Response {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(format!("Bearer {VALID_TOKEN}").as_str());

    if !authorized {
        return (StatusCode::UNAUTHORIZED, "").into_response();
    }
    Json(json!([
        {"id": 7, "cliente": "Ana", "total": 100.0, "fechaCreacion": "2024-01-10"},
        {"id": "ORD-9", "customer": "Luis", "total": null, "createdAt": "2024-01-12T10:00:00Z"}
    ]))
    .into_response()
}

async fn server_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"] == "secreto1" {
        Json(json!({
            "token": VALID_TOKEN,
            "usuario": {"id": 1, "username": body["username"], "email": "admin@tienda.co", "fullName": "Admin"}
        }))
        .into_response()
    } else {
        (StatusCode::UNAUTHORIZED, "Credenciales inválidas").into_response()
    }
}

async fn signup(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({"usuario": {"id": 2, "username": body["username"], "email": body["email"], "fullName": body["fullName"]}}))
}
