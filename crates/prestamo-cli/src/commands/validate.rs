use clap::Args;
use serde_json::{json, Value};

use prestamo_core::dominican_id::{self, DocumentKind};

/// Arguments for document validation
#[derive(Args)]
pub struct ValidateIdArgs {
    /// Document kind: cedula, rnc, ncf, or nss
    #[arg(long)]
    pub kind: String,

    /// Document number (dashes and spaces allowed)
    #[arg(long)]
    pub value: String,
}

pub fn run_validate_id(args: ValidateIdArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let kind = DocumentKind::from_label(&args.kind)
        .ok_or("--kind must be one of: cedula, rnc, ncf, nss")?;
    let valid = dominican_id::validate_document(kind, &args.value);

    Ok(json!({
        "kind": kind,
        "value": args.value,
        "valid": valid,
    }))
}
