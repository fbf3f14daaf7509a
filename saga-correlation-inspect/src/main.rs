/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use saga_correlation::{
    CorrelationConfig, CorrelationProperty, MessageType, SagaDataCorrelationProperties,
};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::info;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Loads a saga correlation config, lists its declared correlation properties and
/// resolves message types against it.
#[derive(Parser)]
#[command(version, about)]
struct InspectArgs {
    #[arg(short, long, value_name = "FILE")]
    config: String,

    /// Message type to resolve; may be repeated.
    #[arg(short, long, value_name = "TYPE")]
    resolve: Vec<String>,

    /// Also resolve every message type named anywhere in the config.
    #[arg(long)]
    all: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Serialize)]
struct Resolution {
    message_type: MessageType,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<Vec<CorrelationProperty>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct InspectionReport {
    saga_data_type: MessageType,
    declared: Vec<CorrelationProperty>,
    resolutions: Vec<Resolution>,
}

impl InspectionReport {
    fn unresolved(&self) -> impl Iterator<Item = &Resolution> {
        self.resolutions
            .iter()
            .filter(|resolution| resolution.error.is_some())
    }
}

fn requested_types(args: &InspectArgs, config: &CorrelationConfig) -> Vec<MessageType> {
    let mut requested: BTreeSet<String> = args.resolve.iter().cloned().collect();

    if args.all {
        requested.extend(
            config
                .correlations
                .iter()
                .map(|declaration| declaration.message_type.clone()),
        );
        for (message_type, supertypes) in &config.hierarchy {
            requested.insert(message_type.clone());
            requested.extend(supertypes.iter().cloned());
        }
    }

    requested.into_iter().map(MessageType::from).collect()
}

fn inspect(
    correlations: &SagaDataCorrelationProperties,
    requested: Vec<MessageType>,
) -> InspectionReport {
    let mut declared: Vec<CorrelationProperty> = correlations.iter().cloned().collect();
    declared.sort_by_key(|property| property.to_string());

    let resolutions = requested
        .into_iter()
        .map(|message_type| match correlations.for_message_type(&message_type) {
            Ok(properties) => Resolution {
                message_type,
                properties: Some(properties.to_vec()),
                error: None,
            },
            Err(err) => Resolution {
                message_type,
                properties: None,
                error: Some(err.to_string()),
            },
        })
        .collect();

    InspectionReport {
        saga_data_type: correlations.saga_data_type().clone(),
        declared,
        resolutions,
    }
}

fn print_text(report: &InspectionReport) {
    println!("saga data: {}", report.saga_data_type);
    println!("declared correlation properties ({}):", report.declared.len());
    for property in &report.declared {
        println!("  {property}");
    }

    if report.resolutions.is_empty() {
        return;
    }

    println!("resolutions:");
    for resolution in &report.resolutions {
        match (&resolution.properties, &resolution.error) {
            (Some(properties), _) => {
                let rendered: Vec<String> = properties.iter().map(ToString::to_string).collect();
                println!("  {} => {}", resolution.message_type, rendered.join(", "));
            }
            (None, Some(error)) => println!("  {} => error: {error}", resolution.message_type),
            (None, None) => println!("  {} => <none>", resolution.message_type),
        }
    }
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let args = InspectArgs::parse();
    info!("Started saga-correlation-inspect");

    let config = CorrelationConfig::from_file(&args.config)
        .with_context(|| format!("loading correlation config {}", args.config))?;
    let correlations = config
        .build()
        .with_context(|| format!("building correlations from {}", args.config))?;

    let report = inspect(&correlations, requested_types(&args, &config));

    match args.format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("rendering report as JSON")?
        ),
    }

    let unresolved: Vec<String> = report
        .unresolved()
        .map(|resolution| resolution.message_type.to_string())
        .collect();
    if !unresolved.is_empty() {
        bail!("unresolved message types: {}", unresolved.join(", "));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{inspect, requested_types, InspectArgs, OutputFormat};
    use saga_correlation::{CorrelationConfig, MessageType};

    const CONFIG: &str = r#"{
        saga_data_type: "OrderSagaData",
        correlations: [
            { message_type: "OrderPlaced", property: "order_id", saga_data_property: "order_id" },
        ],
        hierarchy: { PriorityOrderPlaced: ["OrderPlaced"], Ping: [] },
    }"#;

    fn args(resolve: &[&str], all: bool) -> InspectArgs {
        InspectArgs {
            config: "inline".to_string(),
            resolve: resolve.iter().map(|s| s.to_string()).collect(),
            all,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn all_collects_every_named_type_once() {
        let config = CorrelationConfig::from_json5_str(CONFIG).expect("config should parse");

        let requested = requested_types(&args(&["OrderPlaced"], true), &config);

        assert_eq!(
            requested,
            vec![
                MessageType::new("OrderPlaced"),
                MessageType::new("Ping"),
                MessageType::new("PriorityOrderPlaced"),
            ]
        );
    }

    #[test]
    fn report_flags_unresolved_types() {
        let config = CorrelationConfig::from_json5_str(CONFIG).expect("config should parse");
        let correlations = config.build().expect("descriptor should build");

        let report = inspect(
            &correlations,
            requested_types(&args(&[], true), &config),
        );

        let unresolved: Vec<String> = report
            .unresolved()
            .map(|resolution| resolution.message_type.to_string())
            .collect();
        assert_eq!(unresolved, vec!["Ping"]);
        assert_eq!(report.declared.len(), 1);

        let json = serde_json::to_value(&report).expect("report should serialize");
        assert_eq!(json["saga_data_type"], "OrderSagaData");
        assert_eq!(
            json["resolutions"][0]["properties"][0]["property_name"],
            "order_id"
        );
    }
}
