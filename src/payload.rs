// Payload assembly for the templates/update call. Struct field order is
// the wire order: credentials and template body first, then whichever
// metadata fields are actually present.

use crate::metadata::MetadataRecord;
use serde::Serialize;

/// Body of one update request. Optional fields are omitted from the JSON
/// entirely when not provided; the API treats an explicit empty value as
/// an instruction to clear the remote field, which is never what a sync
/// from this table means.
#[derive(Debug, Serialize)]
pub struct Payload {
    pub key: String,
    pub name: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl Payload {
    /// Build the payload for one template. Metadata fields are attached
    /// only when non-empty, and each attached field is echoed so the
    /// operator sees exactly which headers are being overwritten.
    pub fn build(api_key: &str, slug: &str, code: String, meta: Option<&MetadataRecord>) -> Payload {
        let mut payload = Payload {
            key: api_key.to_string(),
            name: slug.to_string(),
            code,
            from_email: None,
            from_name: None,
            subject: None,
            labels: None,
        };

        let Some(meta) = meta else {
            return payload;
        };

        print!("With metadata: [");
        if !meta.from_email.is_empty() {
            print!("from_email: '{}'", meta.from_email);
            payload.from_email = Some(meta.from_email.clone());
        }
        if !meta.from_name.is_empty() {
            print!("from_name: '{}'", meta.from_name);
            payload.from_name = Some(meta.from_name.clone());
        }
        if !meta.subject.is_empty() {
            print!("subject: '{}'", meta.subject);
            payload.subject = Some(meta.subject.clone());
        }
        if !meta.labels.is_empty() {
            print!("labels: '{:?}'", meta.labels);
            payload.labels = Some(meta.labels.clone());
        }
        print!("]");

        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_metadata_yields_all_fields_in_wire_order() {
        let meta = MetadataRecord {
            subject: "Hello There".into(),
            from_email: "a@x.com".into(),
            from_name: "Ada".into(),
            labels: vec!["new".into(), "billing".into()],
        };
        let payload = Payload::build("KEY", "welcome", "Hi!".into(), Some(&meta));

        // Serializing through to_string keeps struct field order.
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            json,
            "{\"key\":\"KEY\",\"name\":\"welcome\",\"code\":\"Hi!\",\
             \"from_email\":\"a@x.com\",\"from_name\":\"Ada\",\
             \"subject\":\"Hello There\",\"labels\":[\"new\",\"billing\"]}"
        );
    }

    #[test]
    fn no_metadata_yields_only_required_fields() {
        let payload = Payload::build("KEY", "goodbye", "Bye!".into(), None);

        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, "{\"key\":\"KEY\",\"name\":\"goodbye\",\"code\":\"Bye!\"}");
    }

    #[test]
    fn empty_fields_are_omitted_not_sent_empty() {
        let meta = MetadataRecord {
            subject: String::new(),
            from_email: "a@x.com".into(),
            from_name: String::new(),
            labels: vec![],
        };
        let payload = Payload::build("KEY", "welcome", "Hi!".into(), Some(&meta));

        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("from_email"));
        assert!(!object.contains_key("subject"));
        assert!(!object.contains_key("from_name"));
        assert!(!object.contains_key("labels"));
    }
}
