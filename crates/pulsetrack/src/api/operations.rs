//! GraphQL operation documents and their typed inputs.
//!
//! Each remote operation pairs a const GraphQL document with a serde input
//! struct, so the shapes sent over the wire are checked at compile time
//! instead of being assembled from untyped maps.

use serde::Serialize;
use uuid::Uuid;

use crate::model::Gender;

/// Selection set returned for an individual, including nested connections.
const INDIVIDUAL_FIELDS: &str = r"
      id
      firstName
      lastName
      gender
      dob
      oximeter {
        items {
          id
          individualID
          spo2
          heartRate
          createdAt
          updatedAt
          owner
        }
        nextToken
      }
      pulseOximetryRange {
        items {
          id
          individualID
          minSpo2
          minHeartRate
          maxHeartRate
          createdAt
          updatedAt
          owner
        }
        nextToken
      }
      createdAt
      updatedAt
      owner";

/// Selection set returned for a reading.
const OXIMETER_FIELDS: &str = r"
      id
      individualID
      spo2
      heartRate
      createdAt
      updatedAt
      owner";

/// Selection set returned for an alert range.
const RANGE_FIELDS: &str = r"
      id
      individualID
      minSpo2
      minHeartRate
      maxHeartRate
      createdAt
      updatedAt
      owner";

/// Build a mutation document from its header and selection set.
fn mutation_document(
    op: &str,
    field: &str,
    input_ty: &str,
    cond_ty: &str,
    selection: &str,
) -> String {
    format!(
        "mutation {op}($input: {input_ty}!, $condition: {cond_ty}) {{\n  \
         {field}(input: $input, condition: $condition) {{{selection}\n  }}\n}}"
    )
}

/// Build a query document from its header and selection set.
fn query_document(op: &str, field: &str, args_decl: &str, args: &str, selection: &str) -> String {
    format!("query {op}({args_decl}) {{\n  {field}({args}) {{{selection}\n  }}\n}}")
}

macro_rules! operations {
    ($($fn_name:ident => ($op:literal, $field:literal, $input_ty:literal, $cond_ty:literal, $selection:expr);)*) => {
        $(
            /// The GraphQL operation for this remote call.
            #[must_use]
            pub fn $fn_name() -> OperationDoc {
                OperationDoc {
                    name: $op,
                    data_field: $field,
                    document: mutation_document($op, $field, $input_ty, $cond_ty, $selection),
                }
            }
        )*
    };
}

/// An owned GraphQL operation document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDoc {
    /// Operation name in the document.
    pub name: &'static str,
    /// Field under `data` holding the result.
    pub data_field: &'static str,
    /// The GraphQL document text.
    pub document: String,
}

operations! {
    create_individual => ("CreateIndividual", "createIndividual",
        "CreateIndividualInput", "ModelIndividualConditionInput", INDIVIDUAL_FIELDS);
    update_individual => ("UpdateIndividual", "updateIndividual",
        "UpdateIndividualInput", "ModelIndividualConditionInput", INDIVIDUAL_FIELDS);
    delete_individual => ("DeleteIndividual", "deleteIndividual",
        "DeleteIndividualInput", "ModelIndividualConditionInput", INDIVIDUAL_FIELDS);
    create_oximeter => ("CreateOximeter", "createOximeter",
        "CreateOximeterInput", "ModelOximeterConditionInput", OXIMETER_FIELDS);
    update_oximeter => ("UpdateOximeter", "updateOximeter",
        "UpdateOximeterInput", "ModelOximeterConditionInput", OXIMETER_FIELDS);
    delete_oximeter => ("DeleteOximeter", "deleteOximeter",
        "DeleteOximeterInput", "ModelOximeterConditionInput", OXIMETER_FIELDS);
    create_pulse_oximetry_range => ("CreatePulseOximetryRange", "createPulseOximetryRange",
        "CreatePulseOximetryRangeInput", "ModelPulseOximetryRangeConditionInput", RANGE_FIELDS);
    update_pulse_oximetry_range => ("UpdatePulseOximetryRange", "updatePulseOximetryRange",
        "UpdatePulseOximetryRangeInput", "ModelPulseOximetryRangeConditionInput", RANGE_FIELDS);
    delete_pulse_oximetry_range => ("DeletePulseOximetryRange", "deletePulseOximetryRange",
        "DeletePulseOximetryRangeInput", "ModelPulseOximetryRangeConditionInput", RANGE_FIELDS);
}

/// The `getIndividual` query.
#[must_use]
pub fn get_individual() -> OperationDoc {
    OperationDoc {
        name: "GetIndividual",
        data_field: "getIndividual",
        document: query_document(
            "GetIndividual",
            "getIndividual",
            "$id: ID!",
            "id: $id",
            INDIVIDUAL_FIELDS,
        ),
    }
}

/// The `listIndividuals` query.
///
/// Returns a connection of individuals; nested reading/range connections are
/// included per item.
#[must_use]
pub fn list_individuals() -> OperationDoc {
    OperationDoc {
        name: "ListIndividuals",
        data_field: "listIndividuals",
        document: format!(
            "query ListIndividuals($limit: Int, $nextToken: String) {{\n  \
             listIndividuals(limit: $limit, nextToken: $nextToken) {{\n    \
             items {{{INDIVIDUAL_FIELDS}\n    }}\n    nextToken\n  }}\n}}"
        ),
    }
}

/// Input for `createIndividual`.
///
/// The date of birth is carried as the already-formatted `yyyy-MM-dd` string
/// produced by the submission handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIndividualInput {
    /// Client-generated identifier.
    pub id: Uuid,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Gender.
    pub gender: Gender,
    /// Date of birth as `yyyy-MM-dd`.
    pub dob: String,
}

/// Input for `updateIndividual`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIndividualInput {
    /// Identifier of the record being updated.
    pub id: Uuid,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Gender.
    pub gender: Gender,
    /// Date of birth as `yyyy-MM-dd`.
    pub dob: String,
}

/// Input for `deleteIndividual`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteIndividualInput {
    /// Identifier of the record being deleted.
    pub id: Uuid,
}

/// Input for `createOximeter`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOximeterInput {
    /// Identifier of the owning individual.
    #[serde(rename = "individualID")]
    pub individual_id: Uuid,
    /// Blood oxygen saturation percentage.
    pub spo2: f64,
    /// Heart rate in beats per minute.
    pub heart_rate: u32,
}

/// Input for `updateOximeter`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOximeterInput {
    /// Identifier of the reading being updated.
    pub id: String,
    /// Blood oxygen saturation percentage.
    pub spo2: f64,
    /// Heart rate in beats per minute.
    pub heart_rate: u32,
}

/// Input for `deleteOximeter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteOximeterInput {
    /// Identifier of the reading being deleted.
    pub id: String,
}

/// Input for `createPulseOximetryRange`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePulseOximetryRangeInput {
    /// Identifier of the owning individual.
    #[serde(rename = "individualID")]
    pub individual_id: Uuid,
    /// Minimum acceptable SpO2 percentage.
    pub min_spo2: f64,
    /// Minimum acceptable heart rate.
    pub min_heart_rate: u32,
    /// Maximum acceptable heart rate.
    pub max_heart_rate: u32,
}

/// Input for `updatePulseOximetryRange`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePulseOximetryRangeInput {
    /// Identifier of the range being updated.
    pub id: String,
    /// Minimum acceptable SpO2 percentage.
    pub min_spo2: f64,
    /// Minimum acceptable heart rate.
    pub min_heart_rate: u32,
    /// Maximum acceptable heart rate.
    pub max_heart_rate: u32,
}

/// Input for `deletePulseOximetryRange`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletePulseOximetryRangeInput {
    /// Identifier of the range being deleted.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_individual_document_shape() {
        let op = create_individual();
        assert_eq!(op.name, "CreateIndividual");
        assert_eq!(op.data_field, "createIndividual");
        assert!(op.document.contains("$input: CreateIndividualInput!"));
        assert!(op.document.contains("$condition: ModelIndividualConditionInput"));
        assert!(op.document.contains("firstName"));
        assert!(op.document.contains("pulseOximetryRange"));
        assert!(op.document.contains("nextToken"));
    }

    #[test]
    fn test_oximeter_documents_have_reading_fields() {
        for op in [create_oximeter(), update_oximeter(), delete_oximeter()] {
            assert!(op.document.contains("individualID"));
            assert!(op.document.contains("heartRate"));
            assert!(op.document.contains("spo2"));
            assert!(!op.document.contains("firstName"));
        }
    }

    #[test]
    fn test_range_documents_have_threshold_fields() {
        for op in [
            create_pulse_oximetry_range(),
            update_pulse_oximetry_range(),
            delete_pulse_oximetry_range(),
        ] {
            assert!(op.document.contains("minSpo2"));
            assert!(op.document.contains("minHeartRate"));
            assert!(op.document.contains("maxHeartRate"));
        }
    }

    #[test]
    fn test_every_mutation_takes_input_and_condition() {
        for op in [
            create_individual(),
            update_individual(),
            delete_individual(),
            create_oximeter(),
            update_oximeter(),
            delete_oximeter(),
            create_pulse_oximetry_range(),
            update_pulse_oximetry_range(),
            delete_pulse_oximetry_range(),
        ] {
            assert!(op.document.starts_with(&format!("mutation {}", op.name)));
            assert!(op.document.contains("input: $input"));
            assert!(op.document.contains("condition: $condition"));
        }
    }

    #[test]
    fn test_get_individual_document() {
        let op = get_individual();
        assert!(op.document.starts_with("query GetIndividual($id: ID!)"));
        assert!(op.document.contains("getIndividual(id: $id)"));
        assert!(op.document.contains("oximeter"));
    }

    #[test]
    fn test_list_individuals_document() {
        let op = list_individuals();
        assert!(op.document.contains("listIndividuals(limit: $limit, nextToken: $nextToken)"));
        assert!(op.document.contains("items"));
    }

    #[test]
    fn test_create_individual_input_wire_shape() {
        let input = CreateIndividualInput {
            id: Uuid::nil(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            gender: Gender::Female,
            dob: "2020-03-05".to_string(),
        };

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["gender"], "female");
        assert_eq!(json["dob"], "2020-03-05");
        assert_eq!(json["id"], Uuid::nil().to_string());
    }

    #[test]
    fn test_create_oximeter_input_wire_shape() {
        let input = CreateOximeterInput {
            individual_id: Uuid::nil(),
            spo2: 96.5,
            heart_rate: 80,
        };

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["individualID"], Uuid::nil().to_string());
        assert_eq!(json["spo2"], 96.5);
        assert_eq!(json["heartRate"], 80);
    }

    #[test]
    fn test_create_range_input_wire_shape() {
        let input = CreatePulseOximetryRangeInput {
            individual_id: Uuid::nil(),
            min_spo2: 92.0,
            min_heart_rate: 50,
            max_heart_rate: 120,
        };

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["minSpo2"], 92.0);
        assert_eq!(json["minHeartRate"], 50);
        assert_eq!(json["maxHeartRate"], 120);
    }
}
