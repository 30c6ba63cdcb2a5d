//! Attribute payload registry
//!
//! Five resource archetypes, each producing a JSON object whose fields agree
//! with one another (a bucket's domain names embed its own name and region,
//! an instance's ARN embeds its own id). The archetype is picked uniformly and
//! independently of the resource's declared type.

use crate::faker::aws;
use crate::faker::chance::{coin, pick, pick_copied};
use crate::faker::words;
use rand::Rng;
use serde_json::{json, Map, Value};
use std::fmt;

/// Resource archetypes known to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeArchetype {
    /// Object-storage bucket
    Bucket,
    /// Identity / IAM user
    User,
    /// Compute instance
    ComputeInstance,
    /// Serverless function
    Function,
    /// Managed database instance
    Database,
}

impl AttributeArchetype {
    /// Every archetype, in selection order
    pub const ALL: [AttributeArchetype; 5] = [
        AttributeArchetype::Bucket,
        AttributeArchetype::User,
        AttributeArchetype::ComputeInstance,
        AttributeArchetype::Function,
        AttributeArchetype::Database,
    ];

    /// Pick an archetype uniformly
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        pick_copied(rng, &Self::ALL)
    }

    /// Generate the attribute object for this archetype
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Map<String, Value> {
        let value = match self {
            AttributeArchetype::Bucket => bucket_attributes(rng),
            AttributeArchetype::User => user_attributes(rng),
            AttributeArchetype::ComputeInstance => compute_instance_attributes(rng),
            AttributeArchetype::Function => function_attributes(rng),
            AttributeArchetype::Database => database_attributes(rng),
        };

        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}

impl fmt::Display for AttributeArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeArchetype::Bucket => write!(f, "bucket"),
            AttributeArchetype::User => write!(f, "user"),
            AttributeArchetype::ComputeInstance => write!(f, "compute instance"),
            AttributeArchetype::Function => write!(f, "function"),
            AttributeArchetype::Database => write!(f, "database"),
        }
    }
}

/// Attributes from a uniformly chosen archetype
pub fn random_attributes<R: Rng + ?Sized>(rng: &mut R) -> Value {
    Value::Object(AttributeArchetype::random(rng).generate(rng))
}

fn bucket_attributes<R: Rng + ?Sized>(rng: &mut R) -> Value {
    let bucket = aws::bucket_name(rng);
    let region = aws::region(rng);

    json!({
        "id": bucket,
        "arn": format!("arn:aws:s3:::{}", bucket),
        "bucket": bucket,
        "bucket_domain_name": format!("{}.s3.amazonaws.com", bucket),
        "bucket_regional_domain_name": format!("{}.s3.{}.amazonaws.com", bucket, region),
        "region": region,
        "versioning": [{
            "enabled": coin(rng),
            "mfa_delete": false,
        }],
        "server_side_encryption_configuration": [{
            "rule": [{
                "apply_server_side_encryption_by_default": [{
                    "sse_algorithm": pick_copied(rng, &["AES256", "aws:kms"]),
                }],
            }],
        }],
        "tags": {
            "Environment": pick_copied(rng, aws::ENVIRONMENTS),
            "Team": pick_copied(rng, &["data", "ml", "web", "mobile"]),
        },
    })
}

fn user_attributes<R: Rng + ?Sized>(rng: &mut R) -> Value {
    let name = aws::user_name(rng);

    json!({
        "id": name,
        "arn": format!("arn:aws:iam::{}:user/{}", aws::account_id(rng), name),
        "name": name,
        "path": "/",
        "permissions_boundary": null,
        "unique_id": format!("AIDA{}", aws::id_digits(rng, 16)),
        "tags": {
            "Role": pick_copied(rng, &["reader", "writer", "admin"]),
            "Team": pick_copied(rng, &["data", "ml", "security"]),
        },
    })
}

fn compute_instance_attributes<R: Rng + ?Sized>(rng: &mut R) -> Value {
    let instance_id = format!("i-{}", aws::id_digits(rng, 17));
    let region = aws::region(rng);

    json!({
        "id": instance_id,
        "arn": aws::arn_in(rng, "ec2", region, &format!("instance/{}", instance_id)),
        "instance_id": instance_id,
        "instance_type": pick_copied(rng, &["t3.micro", "t3.small", "m5.large", "c5.xlarge"]),
        "ami": format!("ami-{}", aws::id_digits(rng, 17)),
        "availability_zone": format!("{}{}", region, pick_copied(rng, &["a", "b", "c"])),
        "private_ip": aws::ipv4(rng, Some((10, 0))),
        "public_ip": aws::ipv4(rng, None),
        "subnet_id": format!("subnet-{}", aws::id_digits(rng, 17)),
        "vpc_security_group_ids": [format!("sg-{}", aws::id_digits(rng, 17))],
        "key_name": words::username(rng),
        "monitoring": coin(rng),
        "state": "running",
        "tags": {
            "Name": format!("{}-instance", aws::resource_name(rng)),
            "Environment": pick_copied(rng, aws::ENVIRONMENTS),
        },
    })
}

fn function_attributes<R: Rng + ?Sized>(rng: &mut R) -> Value {
    let function_name = format!("{}-lambda", aws::resource_name(rng));
    let region = aws::region(rng);

    json!({
        "id": function_name,
        "arn": aws::arn_in(rng, "lambda", region, &format!("function:{}", function_name)),
        "function_name": function_name,
        "role": format!(
            "arn:aws:iam::{}:role/{}-lambda-role",
            aws::account_id(rng),
            aws::resource_name(rng)
        ),
        "handler": "index.handler",
        "runtime": pick_copied(rng, &["nodejs18.x", "python3.9", "java11", "go1.x"]),
        "memory_size": pick_copied(rng, &[128, 256, 512, 1024]),
        "timeout": rng.gen_range(3..=900),
        "last_modified": aws::recent_date(rng),
        "source_code_hash": aws::id_digits(rng, 32),
        "version": "$LATEST",
        "environment": [{
            "variables": {
                "ENV": pick_copied(rng, aws::ENVIRONMENTS),
                "LOG_LEVEL": pick_copied(rng, &["DEBUG", "INFO", "WARN", "ERROR"]),
            },
        }],
        "tags": {
            "Environment": pick_copied(rng, aws::ENVIRONMENTS),
            "Team": pick_copied(rng, &["backend", "data", "ml"]),
        },
    })
}

fn database_attributes<R: Rng + ?Sized>(rng: &mut R) -> Value {
    let identifier = format!("{}-db", aws::resource_name(rng));
    let region = aws::region(rng);
    let (engine, engine_version, port) = *pick(
        rng,
        &[("postgres", "14.2", 5432), ("postgres", "13.7", 5432), ("mysql", "8.0.28", 3306), ("mariadb", "10.6.8", 3306)],
    );

    json!({
        "id": identifier,
        "arn": aws::arn_in(rng, "rds", region, &format!("db:{}", identifier)),
        "identifier": identifier,
        "engine": engine,
        "engine_version": engine_version,
        "instance_class": pick_copied(rng, &["db.t3.micro", "db.t3.small", "db.r5.large"]),
        "allocated_storage": pick_copied(rng, &[20, 50, 100, 200]),
        "storage_type": "gp2",
        "db_name": words::word(rng),
        "username": words::username(rng),
        "port": port,
        "endpoint": format!(
            "{}.{}.{}.rds.amazonaws.com:{}",
            identifier,
            aws::id_digits(rng, 10),
            region,
            port
        ),
        "hosted_zone_id": format!("Z{}", aws::id_digits(rng, 13)),
        "status": "available",
        "multi_az": coin(rng),
        "backup_retention_period": rng.gen_range(1..=35),
        "backup_window": "03:00-04:00",
        "maintenance_window": "sun:04:00-sun:05:00",
        "storage_encrypted": coin(rng),
        "tags": {
            "Environment": pick_copied(rng, aws::ENVIRONMENTS),
            "Team": pick_copied(rng, &["data", "backend", "analytics"]),
        },
    })
}
