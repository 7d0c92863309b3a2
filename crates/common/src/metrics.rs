use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static RPC_CALLS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "example_api_rpc_calls_total",
        "RPC procedure invocations by procedure and outcome",
        &["procedure", "outcome"]
    )
    .expect("register rpc_calls_total")
});

pub static RECORDS_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "example_api_records_created_total",
        "Records inserted into the example table"
    )
    .expect("register records_created_total")
});

pub static CREATE_REJECTED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "example_api_create_rejected_total",
        "Record creations rejected, by reason",
        &["reason"]
    )
    .expect("register create_rejected_total")
});

pub fn record_rpc_call(procedure: &str, outcome: &str) {
    RPC_CALLS_TOTAL.with_label_values(&[procedure, outcome]).inc();
}

pub fn record_created() {
    RECORDS_CREATED_TOTAL.inc();
}

pub fn record_create_rejected(reason: &str) {
    CREATE_REJECTED_TOTAL.with_label_values(&[reason]).inc();
}

/// Render the default registry in the Prometheus text format.
pub fn encode_metrics() -> Result<String, String> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| format!("metrics encode error: {e}"))?;
    String::from_utf8(buffer).map_err(|e| format!("metrics encode error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_show_up_in_exposition() {
        record_rpc_call("example.hello", "ok");
        record_created();
        record_create_rejected("too_short");
        let text = encode_metrics().unwrap();
        assert!(text.contains("example_api_rpc_calls_total"));
        assert!(text.contains("procedure=\"example.hello\""));
        assert!(text.contains("example_api_records_created_total"));
        assert!(text.contains("reason=\"too_short\""));
    }
}
