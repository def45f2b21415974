use serde_json::json;

pub fn main() {
    // Configure env_logger to see dpk logs.
    env_logger::Builder::from_env(env_logger::Env::new().default_filter_or("dpk=trace")).init();

    let deriver = dpk::DeriverConfig::default()
        .to_deriver()
        .expect("default configuration is valid");

    let events = [
        None,
        Some(json!({"partitionKey": "orders-eu"})),
        Some(json!({"orderId": 7, "amount": 12.5})),
        Some(json!("some event")),
    ];

    for event in &events {
        let key = deriver.derive(event.as_ref());
        println!("{:?} -> {}", event, key);
    }
}
