use super::*;

#[test]
fn test_to_pascal_case() {
    assert_eq!(to_pascal_case("user_account"), "UserAccount");
    assert_eq!(to_pascal_case("order_items"), "OrderItems");
    assert_eq!(to_pascal_case("orders"), "Orders");
    assert_eq!(to_pascal_case("ID"), "Id");
}

#[test]
fn test_to_pascal_case_skips_empty_fragments() {
    assert_eq!(to_pascal_case("_user_account"), "UserAccount");
    assert_eq!(to_pascal_case("user__account_"), "UserAccount");
    assert_eq!(to_pascal_case("___"), "");
    assert_eq!(to_pascal_case(""), "");
}

#[test]
fn test_to_camel_case() {
    assert_eq!(to_camel_case("user_account"), "userAccount");
    assert_eq!(to_camel_case("order_items"), "orderItems");
    assert_eq!(to_camel_case("ID"), "id");
    assert_eq!(to_camel_case("id"), "id");
}

#[test]
fn test_to_camel_case_skips_empty_fragments() {
    // The first non-empty fragment is the one lowercased in full.
    assert_eq!(to_camel_case("_created_at"), "createdAt");
    assert_eq!(to_camel_case("created__at"), "createdAt");
    assert_eq!(to_camel_case(""), "");
}

#[test]
fn test_map_type_integers() {
    assert_eq!(map_type("INT"), FieldType::Integer);
    assert_eq!(map_type("BIGINT"), FieldType::Integer);
    assert_eq!(map_type("TINYINT(1)"), FieldType::Integer);
    assert_eq!(map_type("integer"), FieldType::Integer);
    // Rule 1 wins over every later rule, even for names that merely
    // happen to contain "INT".
    assert_eq!(map_type("POINT"), FieldType::Integer);
}

#[test]
fn test_map_type_floats() {
    assert_eq!(map_type("FLOAT"), FieldType::Float);
    assert_eq!(map_type("DOUBLE PRECISION"), FieldType::Float);
    assert_eq!(map_type("DECIMAL(10,2)"), FieldType::Float);
}

#[test]
fn test_map_type_booleans() {
    assert_eq!(map_type("BOOLEAN"), FieldType::Boolean);
    assert_eq!(map_type("BIT"), FieldType::Boolean);
}

#[test]
fn test_map_type_temporal() {
    assert_eq!(map_type("DATE"), FieldType::Date);
    // DATETIME hits the DATE rule before TIME is ever considered.
    assert_eq!(map_type("DATETIME"), FieldType::Date);
    assert_eq!(map_type("TIME"), FieldType::Time);
    assert_eq!(map_type("TIMESTAMP"), FieldType::Timestamp);
    assert_eq!(map_type("timestamp without time zone"), FieldType::Timestamp);
    assert_eq!(map_type("time without time zone"), FieldType::Time);
}

#[test]
fn test_map_type_text_fallback() {
    assert_eq!(map_type("VARCHAR(255)"), FieldType::Text);
    assert_eq!(map_type("TEXT"), FieldType::Text);
    assert_eq!(map_type("ENUM"), FieldType::Text);
    assert_eq!(map_type("BLOB"), FieldType::Blob);
    assert_eq!(map_type("MEDIUMBLOB"), FieldType::Blob);
    assert_eq!(map_type(""), FieldType::Text);
}

#[test]
fn test_rust_type_names() {
    assert_eq!(FieldType::Integer.rust_type(), "i64");
    assert_eq!(FieldType::Float.rust_type(), "f64");
    assert_eq!(FieldType::Boolean.rust_type(), "bool");
    assert_eq!(FieldType::Date.rust_type(), "Date");
    assert_eq!(FieldType::Time.rust_type(), "Time");
    assert_eq!(FieldType::Timestamp.rust_type(), "Timestamp");
    assert_eq!(FieldType::Blob.rust_type(), "Vec<u8>");
    assert_eq!(FieldType::Text.rust_type(), "String");
}

#[test]
fn test_schema_lookup() {
    let schema = DatabaseSchema {
        name: "shop".to_string(),
        tables: vec![
            Table {
                name: "orders".to_string(),
                columns: vec![Column {
                    name: "id".to_string(),
                    engine_type_name: "BIGINT".to_string(),
                    is_primary_key: true,
                    ..Default::default()
                }],
                primary_key_column: Some("id".to_string()),
                ..Default::default()
            },
            Table {
                name: "customers".to_string(),
                ..Default::default()
            },
        ],
    };

    assert!(schema.table("orders").is_some());
    assert!(schema.table("missing").is_none());
    let orders = schema.table("orders").unwrap();
    assert!(orders.column("id").unwrap().is_primary_key);
    assert!(orders.column("total").is_none());
}
