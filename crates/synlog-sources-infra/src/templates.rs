use rand::Rng;

/// Message templates for routine traffic.
pub const NORMAL_TEMPLATES: [&str; 18] = [
    "Request processed successfully",
    "Database query executed in {time}ms",
    "User {user_id} logged in from {ip}",
    "Cache hit for key {key}",
    "API call to {endpoint} completed",
    "Connection timeout to {ip}",
    "ERROR: Failed to connect to database",
    "CRITICAL: Out of memory error",
    "Unauthorized access attempt from {ip}",
    "Payment transaction {transaction_id} completed",
    "500 Internal Server Error on {endpoint}",
    "503 Service Unavailable",
    "Authentication failed for user {user_id}",
    "Potential security breach detected from {ip}",
    "Suspicious activity: Multiple failed login attempts from {ip}",
    "System overload: Request queue at 95% capacity",
    "Database connection pool exhausted",
    "Failed to process payment for transaction {transaction_id}",
];

/// Security/failure-themed templates injected at low probability.
pub const ANOMALY_TEMPLATES: [&str; 7] = [
    "CRITICAL: Unauthorized access attempt detected from {ip}",
    "FATAL: System crash imminent - memory exhausted",
    "Security breach: SQL injection attack from {ip}",
    "Malicious payload detected in request from {ip}",
    "Exploit attempt: Buffer overflow detected",
    "Unauthorized API key usage from {ip}",
    "CRITICAL: Data corruption detected in table users",
];

/// API paths substituted for the `{endpoint}` placeholder.
pub const ENDPOINTS: [&str; 4] = ["/api/users", "/api/orders", "/api/products", "/api/auth"];

/// Substitutes every placeholder present in `template` with a fresh
/// synthetic value. Placeholders absent from the template cost nothing.
pub fn render(template: &str, rng: &mut impl Rng) -> String {
    let mut message = template.to_string();

    if message.contains("{time}") {
        message = message.replace("{time}", &random_latency_ms(rng).to_string());
    }
    if message.contains("{user_id}") {
        message = message.replace("{user_id}", &random_user_id(rng));
    }
    if message.contains("{ip}") {
        message = message.replace("{ip}", &random_ip(rng));
    }
    if message.contains("{key}") {
        message = message.replace("{key}", &random_cache_key(rng));
    }
    if message.contains("{endpoint}") {
        message = message.replace("{endpoint}", random_endpoint(rng));
    }
    if message.contains("{transaction_id}") {
        message = message.replace("{transaction_id}", &random_transaction_id(rng));
    }

    message
}

fn random_latency_ms(rng: &mut impl Rng) -> u32 {
    rng.gen_range(10..=5000)
}

fn random_user_id(rng: &mut impl Rng) -> String {
    format!("user_{}", rng.gen_range(1000..=9999))
}

fn random_ip(rng: &mut impl Rng) -> String {
    format!(
        "{}.{}.{}.{}",
        rng.gen_range(1..=255),
        rng.gen_range(1..=255),
        rng.gen_range(1..=255),
        rng.gen_range(1..=255)
    )
}

fn random_cache_key(rng: &mut impl Rng) -> String {
    format!("cache_key_{}", rng.gen_range(100..=999))
}

fn random_endpoint(rng: &mut impl Rng) -> &'static str {
    ENDPOINTS[rng.gen_range(0..ENDPOINTS.len())]
}

fn random_transaction_id(rng: &mut impl Rng) -> String {
    format!("txn_{}", rng.gen_range(10000..=99999))
}
