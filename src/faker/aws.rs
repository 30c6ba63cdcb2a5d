//! Cloud-flavored leaf generators
//!
//! Small helpers producing account ids, regions, ARNs, resource catalogs and
//! module addresses. None of them hold state; everything comes from the
//! supplied random source.

use crate::faker::chance::{coin, pick_copied, Probability};
use crate::faker::words;
use crate::types::ResourceMode;
use chrono::{Duration, NaiveDate};
use rand::Rng;

/// Regions used for every region-valued field
pub const REGIONS: &[&str] = &["us-east-1", "us-west-2", "eu-west-1", "ap-southeast-1", "ca-central-1"];

/// Resource types available to managed resources
pub const MANAGED_RESOURCE_TYPES: &[&str] = &[
    "aws_s3_bucket",
    "aws_iam_user",
    "aws_iam_role",
    "aws_lambda_function",
    "aws_ec2_instance",
    "aws_rds_instance",
    "aws_dynamodb_table",
    "aws_vpc",
    "aws_security_group",
    "aws_route53_zone",
    "aws_cloudfront_distribution",
    "aws_ecs_cluster",
    "aws_eks_cluster",
    "aws_api_gateway_rest_api",
];

/// Resource types available to data resources
pub const DATA_RESOURCE_TYPES: &[&str] = &[
    "aws_ami",
    "aws_availability_zones",
    "aws_caller_identity",
    "aws_region",
    "aws_s3_bucket",
    "aws_iam_policy_document",
    "aws_vpc",
    "aws_subnet",
    "aws_security_group",
];

/// Resource block names
pub const RESOURCE_NAMES: &[&str] =
    &["main", "primary", "secondary", "backup", "test", "prod", "staging", "dev", "example"];

/// Module call names
pub const MODULE_NAMES: &[&str] = &[
    "network", "compute", "storage", "database", "iam", "monitoring", "vpc", "eks", "app", "dns",
];

/// Environment tag values
pub const ENVIRONMENTS: &[&str] = &["prod", "staging", "dev"];

const BUCKET_PREFIXES: &[&str] = &["turo", "company", "app", "data", "backup", "logs", "config"];
const BUCKET_MIDDLES: &[&str] = &["xyz", "main", "core", "service", "data", "bucket"];
const BUCKET_SUFFIXES: &[&str] = &["prod", "staging", "dev", "test", "ml", "analytics", "artifacts"];
const USER_ROLES: &[&str] = &["reader", "writer", "admin", "analyst", "developer", "operator"];
const USER_TEAMS: &[&str] = &["ml", "data", "api", "web", "mobile", "infra", "security"];
const ACCESS_KEY_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Chance that a generated module address nests a second module
const NESTED_MODULE_CHANCE: Probability = Probability::percent(30);

/// A twelve-digit account id
pub fn account_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{:012}", rng.gen_range(0..1_000_000_000_000u64))
}

/// One region from [`REGIONS`]
pub fn region<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick_copied(rng, REGIONS)
}

/// An ARN for `service` and `resource` in a random region and account
pub fn arn<R: Rng + ?Sized>(rng: &mut R, service: &str, resource: &str) -> String {
    let region = region(rng);
    let account = account_id(rng);
    format!("arn:aws:{}:{}:{}:{}", service, region, account, resource)
}

/// An ARN in an explicit region
pub fn arn_in<R: Rng + ?Sized>(rng: &mut R, service: &str, region: &str, resource: &str) -> String {
    format!("arn:aws:{}:{}:{}:{}", service, region, account_id(rng), resource)
}

/// A twenty-character access key id starting with `AKIA`
pub fn access_key_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let tail: String = (0..16)
        .map(|_| char::from(ACCESS_KEY_CHARSET[rng.gen_range(0..ACCESS_KEY_CHARSET.len())]))
        .collect();
    format!("AKIA{}", tail)
}

/// A bucket name such as `data-core-analytics`
pub fn bucket_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}-{}-{}",
        pick_copied(rng, BUCKET_PREFIXES),
        pick_copied(rng, BUCKET_MIDDLES),
        pick_copied(rng, BUCKET_SUFFIXES)
    )
}

/// A user name, either `team-role` or a bare role
pub fn user_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    if coin(rng) {
        format!("{}-{}", pick_copied(rng, USER_TEAMS), pick_copied(rng, USER_ROLES))
    } else {
        pick_copied(rng, USER_ROLES).to_string()
    }
}

/// A resource type from the catalog matching `mode`
pub fn resource_type<R: Rng + ?Sized>(rng: &mut R, mode: ResourceMode) -> &'static str {
    match mode {
        ResourceMode::Managed => pick_copied(rng, MANAGED_RESOURCE_TYPES),
        ResourceMode::Data => pick_copied(rng, DATA_RESOURCE_TYPES),
    }
}

/// A resource block name
pub fn resource_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick_copied(rng, RESOURCE_NAMES)
}

/// A module address such as `module.network` or `module.app.module.dns`
pub fn module_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let outer = pick_copied(rng, MODULE_NAMES);
    if NESTED_MODULE_CHANCE.sample(rng) {
        format!("module.{}.module.{}", outer, pick_copied(rng, MODULE_NAMES))
    } else {
        format!("module.{}", outer)
    }
}

/// The provider short name implied by a resource type's prefix
///
/// Unknown prefixes fall back to `aws`.
pub fn provider_name(resource_type: &str) -> &'static str {
    ["azurerm", "google", "kubernetes", "aws"]
        .into_iter()
        .find(|provider| {
            resource_type
                .strip_prefix(provider)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('_'))
        })
        .unwrap_or("aws")
}

/// The provider configuration address for a resource
///
/// Resources inside a module carry the module address as a prefix.
pub fn provider_address(resource_type: &str, module: Option<&str>) -> String {
    let provider =
        format!("provider[\"registry.terraform.io/hashicorp/{}\"]", provider_name(resource_type));
    match module {
        Some(module) => format!("{}.{}", module, provider),
        None => provider,
    }
}

/// A string of random digits used for synthetic ids
pub fn id_digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    words::digits(rng, len)
}

/// A calendar date within roughly the last five years, as `YYYY-MM-DD`
pub fn recent_date<R: Rng + ?Sized>(rng: &mut R) -> String {
    let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default();
    let date = base + Duration::days(rng.gen_range(0..(5 * 365)));
    date.format("%Y-%m-%d").to_string()
}

/// A Unix timestamp between 2000 and 2030
pub fn unix_time<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.gen_range(946_684_800..1_893_456_000)
}

/// A dotted IPv4 address with the given first two octets, or random ones
pub fn ipv4<R: Rng + ?Sized>(rng: &mut R, prefix: Option<(u8, u8)>) -> String {
    let (a, b) = prefix.unwrap_or_else(|| (rng.gen_range(1..255), rng.gen_range(0..255)));
    format!("{}.{}.{}.{}", a, b, rng.gen_range(0..255), rng.gen_range(1..255))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_account_id_is_twelve_digits() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let id = account_id(&mut rng);
            assert_eq!(id.len(), 12);
            assert!(id.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_arn_shape() {
        let mut rng = StdRng::seed_from_u64(2);
        let value = arn(&mut rng, "iam", "user/admin");
        let parts: Vec<&str> = value.splitn(6, ':').collect();

        assert_eq!(parts[0], "arn");
        assert_eq!(parts[1], "aws");
        assert_eq!(parts[2], "iam");
        assert!(REGIONS.contains(&parts[3]));
        assert_eq!(parts[4].len(), 12);
        assert_eq!(parts[5], "user/admin");
    }

    #[test]
    fn test_access_key_id_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let key = access_key_id(&mut rng);
        assert_eq!(key.len(), 20);
        assert!(key.starts_with("AKIA"));
        assert!(key.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_resource_type_follows_mode() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..200 {
            assert!(MANAGED_RESOURCE_TYPES.contains(&resource_type(&mut rng, ResourceMode::Managed)));
            assert!(DATA_RESOURCE_TYPES.contains(&resource_type(&mut rng, ResourceMode::Data)));
        }
    }

    #[test]
    fn test_module_address_shape() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut nested = 0;
        for _ in 0..200 {
            let address = module_address(&mut rng);
            let segments: Vec<&str> = address.split('.').collect();
            assert!(segments.len() == 2 || segments.len() == 4, "{}", address);
            assert_eq!(segments[0], "module");
            if segments.len() == 4 {
                assert_eq!(segments[2], "module");
                nested += 1;
            }
        }
        assert!(nested > 0);
    }

    #[test]
    fn test_provider_name_from_prefix() {
        assert_eq!(provider_name("aws_s3_bucket"), "aws");
        assert_eq!(provider_name("azurerm_resource_group"), "azurerm");
        assert_eq!(provider_name("google_compute_instance"), "google");
        assert_eq!(provider_name("kubernetes_namespace"), "kubernetes");
        assert_eq!(provider_name("random_pet"), "aws");
        assert_eq!(provider_name("awsome_thing"), "aws");
    }

    #[test]
    fn test_provider_address_with_module() {
        assert_eq!(
            provider_address("aws_vpc", None),
            "provider[\"registry.terraform.io/hashicorp/aws\"]"
        );
        assert_eq!(
            provider_address("google_dns_zone", Some("module.dns")),
            "module.dns.provider[\"registry.terraform.io/hashicorp/google\"]"
        );
    }

    #[test]
    fn test_recent_date_format() {
        let mut rng = StdRng::seed_from_u64(6);
        let date = recent_date(&mut rng);
        assert!(NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
        assert!(date.as_str() >= "2020-01-01");
    }
}
