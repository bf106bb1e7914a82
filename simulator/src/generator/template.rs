/// XOR of every byte between `$` and `*`, as carried after the `*`.
pub fn checksum(body: &str) -> u8 {
    body.bytes().fold(0, |acc, byte| acc ^ byte)
}

/// Wraps comma-joined fields into a full `$<talker><fields>*HH` sentence.
pub fn sentence(talker: &str, fields: &[String]) -> String {
    let body = format!("{}{}", talker, fields.join(","));
    format!("${}*{:02X}", body, checksum(&body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_matches_reference_sentence() {
        // $GPGGA example from the NMEA-0183 reference.
        let body = "GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,";
        assert_eq!(checksum(body), 0x47);
    }

    #[test]
    fn sentence_frames_fields() {
        let fields = vec!["TTM".to_string(), "1".to_string()];
        let line = sentence("RA", &fields);
        assert!(line.starts_with("$RATTM,1*"));
        assert_eq!(line.len(), "$RATTM,1*".len() + 2);
    }
}
