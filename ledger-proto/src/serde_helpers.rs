//! Field serializers for proto types that have no natural JSON form.

/// Renders `bytes` fields as standard base64, the way the chain's JSON gateway does.
pub mod base64_bytes {
    use base64::{Engine, engine::general_purpose::STANDARD};
    use serde::Serializer;

    pub fn serialize<T, S>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: AsRef<[u8]>,
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes.as_ref()))
    }
}

/// Renders `repeated bytes` fields as a list of base64 strings.
pub mod base64_bytes_list {
    use base64::{Engine, engine::general_purpose::STANDARD};
    use serde::{Serializer, ser::SerializeSeq};

    pub fn serialize<S>(items: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(items.len()))?;
        for item in items {
            seq.serialize_element(&STANDARD.encode(item))?;
        }
        seq.end()
    }
}

/// Renders decimal values that travel as ASCII `bytes` (e.g. mint inflation) as strings.
pub mod ascii_bytes {
    use serde::Serializer;

    pub fn serialize<T, S>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: AsRef<[u8]>,
        S: Serializer,
    {
        serializer.serialize_str(&String::from_utf8_lossy(bytes.as_ref()))
    }
}

/// Renders `int64`/`uint64` fields as decimal strings.
pub mod int64 {
    use serde::Serializer;
    use std::fmt::Display;

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }
}

/// A prost enumeration with a proto name per value.
pub trait ProtoEnum: TryFrom<i32> {
    fn proto_name(&self) -> &'static str;
}

/// Renders an enumeration field by name. Values outside the enum stay numeric.
pub fn enum_name<E, S>(value: i32, serializer: S) -> Result<S::Ok, S::Error>
where
    E: ProtoEnum,
    S: serde::Serializer,
{
    match E::try_from(value) {
        Ok(known) => serializer.serialize_str(known.proto_name()),
        Err(_) => serializer.serialize_i32(value),
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        gov::{ProposalStatus, Vote, VoteOption},
        staking::{BondStatus, Validator},
    };
    use serde_json::json;

    #[test]
    fn test_enums_render_by_name() {
        let validator = Validator {
            status: BondStatus::Unbonding as i32,
            ..Default::default()
        };

        let json = serde_json::to_value(&validator).unwrap();

        assert_eq!(json["status"], "BOND_STATUS_UNBONDING");
        assert_eq!(json["unbonding_height"], "0");
    }

    #[test]
    fn test_unknown_enum_value_stays_numeric() {
        let vote = Vote {
            proposal_id: 7,
            option: 42,
            ..Default::default()
        };

        let json = serde_json::to_value(&vote).unwrap();

        assert_eq!(json["option"], 42);
        assert_eq!(json["proposal_id"], "7");
        assert_eq!(
            serde_json::to_value(ProposalStatus::Passed.as_str_name()).unwrap(),
            json!("PROPOSAL_STATUS_PASSED")
        );
        assert_eq!(VoteOption::NoWithVeto.as_str_name(), "VOTE_OPTION_NO_WITH_VETO");
    }
}
