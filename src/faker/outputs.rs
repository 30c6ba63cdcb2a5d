//! Output payload registry
//!
//! Half of all outputs are simple scalars; the other half come from one of
//! five structured archetypes. Every archetype emits a type descriptor in the
//! state format's notation that describes the value it emits.

use crate::faker::aws;
use crate::faker::chance::{coin, pick_copied, Probability};
use crate::faker::words;
use crate::state::Output;
use rand::Rng;
use serde_json::{json, Map, Value};

/// Chance that an output is a simple scalar
const SIMPLE_OUTPUT_CHANCE: Probability = Probability::percent(50);

/// Scalar output kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimpleOutputKind {
    /// A sentence typed `"string"`
    String,
    /// An integer typed `"number"`
    Number,
    /// A boolean typed `"bool"`
    Bool,
}

/// Structured output archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexOutputKind {
    /// A bucket access policy, JSON-encoded into a string
    BucketPolicy,
    /// Generated credentials keyed by user name
    UserCredentials,
    /// A database connection profile
    DatabaseConnection,
    /// VPC, subnet and zone identifiers
    NetworkTopology,
    /// A security group with its rules
    SecurityGroup,
}

impl SimpleOutputKind {
    /// Every simple kind
    pub const ALL: [SimpleOutputKind; 3] =
        [SimpleOutputKind::String, SimpleOutputKind::Number, SimpleOutputKind::Bool];

    /// Generate an output of this kind
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Output {
        match self {
            SimpleOutputKind::String => Output::new(json!(words::sentence(rng)), json!("string")),
            SimpleOutputKind::Number => Output::new(json!(rng.gen_range(0..1000)), json!("number")),
            SimpleOutputKind::Bool => Output::new(json!(coin(rng)), json!("bool")),
        }
    }
}

impl ComplexOutputKind {
    /// Every complex archetype
    pub const ALL: [ComplexOutputKind; 5] = [
        ComplexOutputKind::BucketPolicy,
        ComplexOutputKind::UserCredentials,
        ComplexOutputKind::DatabaseConnection,
        ComplexOutputKind::NetworkTopology,
        ComplexOutputKind::SecurityGroup,
    ];

    /// Generate an output of this archetype
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Output {
        match self {
            ComplexOutputKind::BucketPolicy => bucket_policy_output(rng),
            ComplexOutputKind::UserCredentials => user_credentials_output(rng),
            ComplexOutputKind::DatabaseConnection => database_connection_output(rng),
            ComplexOutputKind::NetworkTopology => network_topology_output(rng),
            ComplexOutputKind::SecurityGroup => security_group_output(rng),
        }
    }
}

/// Generate one output: a simple scalar half of the time, otherwise a
/// structured archetype
pub fn random_output<R: Rng + ?Sized>(rng: &mut R) -> Output {
    if SIMPLE_OUTPUT_CHANCE.sample(rng) {
        pick_copied(rng, &SimpleOutputKind::ALL).generate(rng)
    } else {
        pick_copied(rng, &ComplexOutputKind::ALL).generate(rng)
    }
}

/// `["object", {..}]` from attribute/type pairs
fn object_type(attributes: &[(&str, Value)]) -> Value {
    let fields: Map<String, Value> =
        attributes.iter().map(|(name, ty)| (name.to_string(), ty.clone())).collect();
    json!(["object", fields])
}

fn list_of(element: Value) -> Value {
    json!(["list", element])
}

fn map_of(element: Value) -> Value {
    json!(["map", element])
}

fn bucket_policy_output<R: Rng + ?Sized>(rng: &mut R) -> Output {
    let bucket = aws::bucket_name(rng);
    let account = aws::account_id(rng);
    let user = aws::user_name(rng);
    let principal = format!("arn:aws:iam::{}:user/{}", account, user);

    let policy = json!({
        "Version": "2012-10-17",
        "Statement": [
            {
                "Effect": "Allow",
                "Action": "s3:ListBucket",
                "Resource": [
                    format!("arn:aws:s3:::{}/*", bucket),
                    format!("arn:aws:s3:::{}", bucket),
                ],
                "Principal": { "AWS": principal },
            },
            {
                "Effect": "Allow",
                "Action": "s3:GetObject",
                "Resource": [format!("arn:aws:s3:::{}/*", bucket)],
                "Principal": { "AWS": principal },
            },
        ],
    });

    Output::new(Value::String(policy.to_string()), json!("string"))
}

fn user_credentials_output<R: Rng + ?Sized>(rng: &mut R) -> Output {
    let mut users = Map::new();
    let count = rng.gen_range(2..=6);

    while users.len() < count {
        let name = aws::user_name(rng);
        if users.contains_key(&name) {
            continue;
        }
        users.insert(
            name,
            json!({
                "access_key_id": aws::access_key_id(rng),
                "encrypted_secret_access_key": words::password(rng, 40),
                "pgp_key_name": {
                    "name": "aws-pgp-v0-2020-07-08.pgp.base64",
                    "public_key_base64": words::password(rng, 64),
                },
            }),
        );
    }

    let credential_type = object_type(&[
        ("access_key_id", json!("string")),
        ("encrypted_secret_access_key", json!("string")),
        (
            "pgp_key_name",
            object_type(&[("name", json!("string")), ("public_key_base64", json!("string"))]),
        ),
    ]);

    Output::new(Value::Object(users), map_of(credential_type))
}

fn database_connection_output<R: Rng + ?Sized>(rng: &mut R) -> Output {
    let value = json!({
        "endpoint": format!("{}.{}.rds.amazonaws.com", words::username(rng), aws::region(rng)),
        "port": 5432,
        "database": words::word(rng),
        "username": words::username(rng),
        "password": words::password(rng, 24),
        "ssl_mode": "require",
        "max_connections": rng.gen_range(10..110),
        "backup_retention_period": rng.gen_range(1..=30),
    });

    let ty = object_type(&[
        ("endpoint", json!("string")),
        ("port", json!("number")),
        ("database", json!("string")),
        ("username", json!("string")),
        ("password", json!("string")),
        ("ssl_mode", json!("string")),
        ("max_connections", json!("number")),
        ("backup_retention_period", json!("number")),
    ]);

    Output::new(value, ty)
}

fn network_topology_output<R: Rng + ?Sized>(rng: &mut R) -> Output {
    let region = aws::region(rng);

    let value = json!({
        "vpc_id": format!("vpc-{}", aws::id_digits(rng, 17)),
        "subnet_ids": [
            format!("subnet-{}", aws::id_digits(rng, 17)),
            format!("subnet-{}", aws::id_digits(rng, 17)),
        ],
        "security_group_ids": [format!("sg-{}", aws::id_digits(rng, 17))],
        "availability_zones": [format!("{}a", region), format!("{}b", region)],
        "cidr_block": format!("10.{}.0.0/16", rng.gen_range(0..256)),
    });

    let ty = object_type(&[
        ("vpc_id", json!("string")),
        ("subnet_ids", list_of(json!("string"))),
        ("security_group_ids", list_of(json!("string"))),
        ("availability_zones", list_of(json!("string"))),
        ("cidr_block", json!("string")),
    ]);

    Output::new(value, ty)
}

fn security_group_output<R: Rng + ?Sized>(rng: &mut R) -> Output {
    let rules: Vec<Value> = (0..rng.gen_range(1..=5))
        .map(|_| {
            let from_port = rng.gen_range(0..65535);
            json!({
                "type": pick_copied(rng, &["ingress", "egress"]),
                "protocol": pick_copied(rng, &["tcp", "udp", "icmp"]),
                "from_port": from_port,
                "to_port": rng.gen_range(from_port..=65535),
                "cidr_blocks": ["0.0.0.0/0"],
            })
        })
        .collect();

    let value = json!({
        "id": format!("sg-{}", aws::id_digits(rng, 17)),
        "name": format!("{}-sg", aws::resource_name(rng)),
        "description": words::sentence(rng),
        "rules": rules,
        "vpc_id": format!("vpc-{}", aws::id_digits(rng, 17)),
    });

    let rule_type = object_type(&[
        ("type", json!("string")),
        ("protocol", json!("string")),
        ("from_port", json!("number")),
        ("to_port", json!("number")),
        ("cidr_blocks", list_of(json!("string"))),
    ]);

    let ty = object_type(&[
        ("id", json!("string")),
        ("name", json!("string")),
        ("description", json!("string")),
        ("rules", list_of(rule_type)),
        ("vpc_id", json!("string")),
    ]);

    Output::new(value, ty)
}
