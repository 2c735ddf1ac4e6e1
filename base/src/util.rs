/// Formats a millisecond length as `m:ss`. Missing and zero lengths render empty.
pub fn format_duration(ms: Option<u64>) -> String {
    match ms {
        None | Some(0) => String::new(),
        Some(ms) => {
            let total_seconds = ms / 1000;
            format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::format_duration;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_duration(Some(200_000)), "3:20");
        assert_eq!(format_duration(Some(61_999)), "1:01");
        assert_eq!(format_duration(Some(5_000)), "0:05");
        assert_eq!(format_duration(Some(3_600_000)), "60:00");
    }

    #[test]
    fn missing_lengths_are_blank() {
        assert_eq!(format_duration(None), "");
        assert_eq!(format_duration(Some(0)), "");
    }
}
