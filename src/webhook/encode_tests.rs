//! Tests for request body encoding.

use super::encode::{encode_json, encode_message, encode_multipart};
use crate::model::{Embed, File, Message, MessageEdit};

const BOUNDARY: &str = "testboundary0123456789";

/// A decoded multipart part: its header block and its data.
struct Part {
    headers: String,
    data: String,
}

impl Part {
    fn name(&self) -> &str {
        let start = self.headers.find("name=\"").unwrap() + "name=\"".len();
        let end = start + self.headers[start..].find('"').unwrap();
        &self.headers[start..end]
    }
}

/// Splits a multipart body into parts, checking the framing on the way.
fn parts(body: &[u8], boundary: &str) -> Vec<Part> {
    let text = std::str::from_utf8(body).unwrap();
    let delimiter = format!("--{boundary}");
    let mut sections: Vec<&str> = text.split(delimiter.as_str()).collect();

    assert_eq!(sections.remove(0), "", "body must start with the delimiter");
    assert_eq!(sections.pop(), Some("--\r\n"), "body must end with the close delimiter");

    sections
        .into_iter()
        .map(|section| {
            let section = section.strip_prefix("\r\n").unwrap();
            let section = section.strip_suffix("\r\n").unwrap();
            let (headers, data) = section.split_once("\r\n\r\n").unwrap();
            Part {
                headers: headers.to_string(),
                data: data.to_string(),
            }
        })
        .collect()
}

fn boundary_of(content_type: &http::HeaderValue) -> String {
    content_type
        .to_str()
        .unwrap()
        .strip_prefix("multipart/form-data; boundary=")
        .unwrap()
        .to_string()
}

fn sample_message() -> Message {
    Message::new()
        .with_content("Deploy finished")
        .with_username("ci")
        .with_embed(
            Embed::new()
                .with_title("build #42")
                .with_color(0x00FF_8800)
                .with_field("branch", "main", true),
        )
}

mod json {
    use super::*;

    #[test]
    fn message_without_files_is_json() {
        let encoded = encode_message(&sample_message()).unwrap();

        assert_eq!(encoded.content_type, "application/json");
    }

    #[test]
    fn json_body_round_trips_serialized_fields() {
        let message = sample_message();
        let encoded = encode_message(&message).unwrap();

        let decoded: Message = serde_json::from_slice(&encoded.body).unwrap();

        assert_eq!(decoded, message);
    }

    #[test]
    fn json_body_drops_query_params() {
        let message = Message::new().with_content("hi").in_thread("77");
        let encoded = encode_message(&message).unwrap();

        assert_eq!(encoded.body, br#"{"content":"hi"}"#);
    }

    #[test]
    fn encode_json_serializes_edits() {
        let edit = MessageEdit::new().with_content("edited");
        let encoded = encode_json(&edit).unwrap();

        assert_eq!(encoded.content_type, "application/json");
        assert_eq!(encoded.body, br#"{"content":"edited"}"#);
    }
}

mod multipart {
    use super::*;

    fn with_files(names: &[&str]) -> Message {
        names.iter().fold(sample_message(), |message, name| {
            message.with_file(File::new(*name, format!("data of {name}").into_bytes()))
        })
    }

    #[test]
    fn content_type_carries_boundary() {
        let message = with_files(&["a.txt"]);
        let encoded = encode_multipart(&message, &message.files, BOUNDARY).unwrap();

        assert_eq!(
            encoded.content_type,
            "multipart/form-data; boundary=testboundary0123456789"
        );
    }

    #[test]
    fn payload_json_comes_first_then_files_in_order() {
        let message = with_files(&["a.txt", "b.png", "c.log"]);
        let encoded = encode_multipart(&message, &message.files, BOUNDARY).unwrap();

        let names: Vec<String> = parts(&encoded.body, BOUNDARY)
            .iter()
            .map(|p| p.name().to_string())
            .collect();

        assert_eq!(names, ["payload_json", "files[0]", "files[1]", "files[2]"]);
    }

    #[test]
    fn payload_json_part_holds_the_message() {
        let message = with_files(&["a.txt"]);
        let encoded = encode_multipart(&message, &message.files, BOUNDARY).unwrap();
        let parts = parts(&encoded.body, BOUNDARY);

        assert_eq!(
            parts[0].headers,
            r#"Content-Disposition: form-data; name="payload_json""#
        );
        let decoded: Message = serde_json::from_str(&parts[0].data).unwrap();
        assert_eq!(decoded.content, "Deploy finished");
        assert!(decoded.files.is_empty());
    }

    #[test]
    fn file_parts_carry_filename_and_raw_bytes() {
        let message = with_files(&["a.txt", "b.png"]);
        let encoded = encode_multipart(&message, &message.files, BOUNDARY).unwrap();
        let parts = parts(&encoded.body, BOUNDARY);

        assert_eq!(
            parts[2].headers,
            "Content-Disposition: form-data; name=\"files[1]\"; filename=\"b.png\"\r\n\
             Content-Type: application/octet-stream"
        );
        assert_eq!(parts[1].data, "data of a.txt");
        assert_eq!(parts[2].data, "data of b.png");
    }

    #[test]
    fn filename_quotes_are_escaped() {
        let message = Message::new().with_file(File::new(r#"we"ird\name.txt"#, vec![b'x']));
        let encoded = encode_multipart(&message, &message.files, BOUNDARY).unwrap();
        let parts = parts(&encoded.body, BOUNDARY);

        assert!(
            parts[1]
                .headers
                .contains(r#"filename="we\"ird\\name.txt""#)
        );
    }

    #[test]
    fn file_bytes_with_other_delimiters_do_not_split_parts() {
        let data = "line\r\n--otherboundary\r\nContent-Disposition: fake\r\n\r\n--otherboundary--\r\n";
        let message = Message::new().with_file(File::new("tricky.txt", data.as_bytes().to_vec()));
        let encoded = encode_multipart(&message, &message.files, BOUNDARY).unwrap();
        let parts = parts(&encoded.body, BOUNDARY);

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1].data, data);
    }

    #[test]
    fn file_bytes_containing_the_boundary_break_framing() {
        let data = format!("before\r\n--{BOUNDARY}\r\nafter");
        let message = Message::new().with_file(File::new("clash.txt", data.into_bytes()));
        let encoded = encode_multipart(&message, &message.files, BOUNDARY).unwrap();
        let text = String::from_utf8(encoded.body).unwrap();

        assert_eq!(text.matches(&format!("--{BOUNDARY}\r\n")).count(), 3);
    }

    #[test]
    fn random_boundaries_differ_between_messages() {
        let message = with_files(&["a.txt"]);

        let first = boundary_of(&encode_message(&message).unwrap().content_type);
        let second = boundary_of(&encode_message(&message).unwrap().content_type);

        assert_ne!(first, second);
    }

    #[test]
    fn empty_file_still_produces_a_part() {
        let message = Message::new().with_file(File::new("empty.bin", Vec::new()));
        let encoded = encode_multipart(&message, &message.files, BOUNDARY).unwrap();
        let parts = parts(&encoded.body, BOUNDARY);

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1].data, "");
    }

    #[test]
    fn encode_message_switches_to_multipart_with_random_boundary() {
        let message = with_files(&["a.txt", "b.txt"]);
        let encoded = encode_message(&message).unwrap();
        let boundary = boundary_of(&encoded.content_type);

        assert_eq!(boundary.len(), 60);
        assert!(boundary.chars().all(|c| c.is_ascii_hexdigit()));

        let parts = parts(&encoded.body, &boundary);
        assert_eq!(parts.len(), 3);
        assert_eq!(
            parts.iter().filter(|p| p.name() == "payload_json").count(),
            1
        );
    }

    #[test]
    fn boundaries_differ_between_calls() {
        let message = with_files(&["a.txt"]);
        let first = boundary_of(&encode_message(&message).unwrap().content_type);
        let second = boundary_of(&encode_message(&message).unwrap().content_type);

        assert_ne!(first, second);
    }
}
