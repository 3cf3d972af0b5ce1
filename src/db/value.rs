use mysql::Value;

/// Render a raw protocol value as the text the server would print.
/// NULL becomes an empty string; the HTML escaping happens later, on
/// every cell uniformly.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::NULL => String::new(),
        Value::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        Value::Int(n) => n.to_string(),
        Value::UInt(n) => n.to_string(),
        Value::Float(n) => n.to_string(),
        Value::Double(n) => n.to_string(),
        Value::Date(y, mo, d, h, mi, s, 0) => {
            format!("{y:04}-{mo:02}-{d:02} {h:02}:{mi:02}:{s:02}")
        }
        Value::Date(y, mo, d, h, mi, s, us) => {
            format!("{y:04}-{mo:02}-{d:02} {h:02}:{mi:02}:{s:02}.{us:06}")
        }
        Value::Time(neg, days, h, mi, s, us) => {
            let sign = if *neg { "-" } else { "" };
            let hours = u32::from(*h) + *days * 24;
            if *us == 0 {
                format!("{sign}{hours:02}:{mi:02}:{s:02}")
            } else {
                format!("{sign}{hours:02}:{mi:02}:{s:02}.{us:06}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_renders_empty() {
        assert_eq!(value_to_string(&Value::NULL), "");
    }

    #[test]
    fn bytes_render_as_utf8_text() {
        let v = Value::Bytes(b"Condo".to_vec());
        assert_eq!(value_to_string(&v), "Condo");
    }

    #[test]
    fn integers_render_in_decimal() {
        assert_eq!(value_to_string(&Value::Int(-3)), "-3");
        assert_eq!(value_to_string(&Value::UInt(42)), "42");
    }

    #[test]
    fn datetime_renders_like_the_server() {
        let v = Value::Date(2024, 1, 2, 0, 0, 0, 0);
        assert_eq!(value_to_string(&v), "2024-01-02 00:00:00");
    }

    #[test]
    fn datetime_keeps_microseconds_when_present() {
        let v = Value::Date(2024, 1, 2, 10, 30, 5, 120);
        assert_eq!(value_to_string(&v), "2024-01-02 10:30:05.000120");
    }

    #[test]
    fn negative_time_carries_its_sign() {
        let v = Value::Time(true, 1, 2, 15, 0, 0);
        assert_eq!(value_to_string(&v), "-26:15:00");
    }
}
