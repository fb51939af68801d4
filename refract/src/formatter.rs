use crate::catalog::TranscodeError;
use colored::*;
use refract_core::registry::LookupError;
use refract_core::{EnumInfo, RecordInfo, StructInfo, TypeSignature, reachable_records};

/// A wrapper struct for a formatted, colored string.
///
/// Implements `Display` so it can be printed directly.
pub struct FormattedString(pub String);

pub struct TypeList(pub Vec<RecordInfo>);

/// A record followed by every record it depends on.
pub struct ExpandedRecord(pub RecordInfo);

impl std::fmt::Display for FormattedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.0)?;
        Ok(())
    }
}

impl From<serde_json::Value> for FormattedString {
    fn from(value: serde_json::Value) -> Self {
        let pretty = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
        FormattedString(pretty)
    }
}

impl From<LookupError> for FormattedString {
    fn from(err: LookupError) -> Self {
        FormattedString(format!(
            "{}\n\n'{}'",
            "Type Lookup Failed:".red().bold(),
            err
        ))
    }
}

impl From<TranscodeError> for FormattedString {
    fn from(err: TranscodeError) -> Self {
        FormattedString(format!("{}\n\n'{}'", "Transform Failed:".red().bold(), err))
    }
}

impl From<anyhow::Error> for FormattedString {
    fn from(err: anyhow::Error) -> Self {
        FormattedString(format!("{}\n\n'{:#}'", "Invalid Input:".red().bold(), err))
    }
}

impl From<TypeList> for FormattedString {
    fn from(TypeList(records): TypeList) -> Self {
        if records.is_empty() {
            return FormattedString("No types found.".yellow().to_string());
        }

        let mut out = String::new();
        out.push_str("Available Types:\n");
        for record in records {
            out.push_str(&format!(
                "  - {} ({})\n",
                record.qualified_name().green(),
                record.kind().cyan()
            ));
        }
        FormattedString(out.trim_end().to_string())
    }
}

impl From<RecordInfo> for FormattedString {
    fn from(record: RecordInfo) -> Self {
        match record {
            RecordInfo::Struct(info) => info.into(),
            RecordInfo::Enum(info) => info.into(),
        }
    }
}

impl From<StructInfo> for FormattedString {
    fn from(info: StructInfo) -> Self {
        let mut out = String::new();
        out.push_str(&format!("{} {} {{\n", "struct".cyan(), info.name().green()));

        for field in info.fields() {
            out.push_str(&format!(
                "  {} {} = {};\n",
                type_name(&field.signature()),
                field.name(),
                field.number()
            ));
        }
        out.push('}');
        FormattedString(out)
    }
}

impl From<EnumInfo> for FormattedString {
    fn from(info: EnumInfo) -> Self {
        let mut out = String::new();
        out.push_str(&format!("{} {} {{\n", "enum".cyan(), info.name().green()));

        for variant in info.variants() {
            let payload = match variant.payload() {
                Some(signature) => format!(": {}", type_name(&signature)),
                None => "".to_string(),
            };

            out.push_str(&format!(
                "  {}{} = {};\n",
                variant.name(),
                payload,
                variant.number().to_string().purple()
            ));
        }
        out.push('}');

        FormattedString(out)
    }
}

impl From<ExpandedRecord> for FormattedString {
    fn from(ExpandedRecord(record): ExpandedRecord) -> Self {
        let out = reachable_records(&record.signature())
            .into_iter()
            .map(|record| FormattedString::from(record).0)
            .collect::<Vec<_>>()
            .join("\n\n");

        FormattedString(out)
    }
}

fn type_name(signature: &TypeSignature) -> ColoredString {
    signature.to_string().yellow()
}
