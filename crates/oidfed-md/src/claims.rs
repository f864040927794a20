//! JWT claim sets carrying a typed data object and extension claims.
//!
//! A [`ClaimSet`] splits a JWT payload three ways: the RFC 7519 registered
//! claims, the members of a typed data object such as an entity statement
//! body, and every other member as an extension claim. The data object is
//! written and read in the flat language-tagged form of its schema type.

use crate::config::CollisionPolicy;
use crate::error::{MetadataError, MetadataResult};
use crate::extended::overlay_extensions;
use crate::extension::{extension_members, STANDARD_JWT_CLAIMS};
use crate::lang::TaggableSchema;
use crate::serializer::LangJsonSerializer;
use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use tracing::instrument;
use uuid::Uuid;

/// Audience claim, a single string or an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    Single(String),
    Multiple(Vec<String>),
}

impl Audience {
    /// Check if `audience` is one of the intended recipients.
    #[must_use]
    pub fn contains(&self, audience: &str) -> bool {
        match self {
            Audience::Single(single) => single == audience,
            Audience::Multiple(all) => all.iter().any(|a| a == audience),
        }
    }

    /// All recipients in order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Audience::Single(single) => vec![single.clone()],
            Audience::Multiple(all) => all.clone(),
        }
    }
}

impl From<&str> for Audience {
    fn from(value: &str) -> Self {
        Audience::Single(value.to_string())
    }
}

impl From<String> for Audience {
    fn from(value: String) -> Self {
        Audience::Single(value)
    }
}

impl From<Vec<String>> for Audience {
    fn from(value: Vec<String>) -> Self {
        Audience::Multiple(value)
    }
}

/// RFC 7519 NumericDate: seconds since the Unix epoch, integer or fractional.
///
/// The JSON number is kept as received, so `1700000000` and `1700000000.5`
/// are both written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericDate(Number);

impl NumericDate {
    /// A date at whole seconds since the epoch.
    #[must_use]
    pub fn from_timestamp(secs: i64) -> Self {
        Self(Number::from(secs))
    }

    /// The current time, truncated to whole seconds.
    #[must_use]
    pub fn now() -> Self {
        Self::from_timestamp(Utc::now().timestamp())
    }

    /// Seconds since the epoch, including any fraction.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.0.as_f64().unwrap_or(f64::MAX)
    }

    /// Whole seconds since the epoch, rounded down.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn timestamp(&self) -> i64 {
        self.0
            .as_i64()
            .unwrap_or_else(|| self.as_f64().floor() as i64)
    }

    /// The date as a UTC date-time, if it is in chrono's range.
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp(), 0)
    }
}

impl From<i64> for NumericDate {
    fn from(secs: i64) -> Self {
        Self::from_timestamp(secs)
    }
}

/// RFC 7519 registered claims. All are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredClaims {
    /// Issuer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// Subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Audience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<Audience>,

    /// Expiration time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<NumericDate>,

    /// Not before.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<NumericDate>,

    /// Issued at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<NumericDate>,

    /// JWT ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl RegisteredClaims {
    /// Check if the expiration time has passed. Claims without `exp` never expire.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.exp
            .as_ref()
            .is_some_and(|exp| Utc::now().timestamp() > exp.timestamp())
    }
}

/// A JWT payload split into registered claims, a data object and extension claims.
///
/// # Example
///
/// ```rust
/// use oidfed_md::ClaimSet;
/// use serde_json::{json, Map, Value};
///
/// let data: Map<String, Value> = json!({"metadata": {}}).as_object().unwrap().clone();
///
/// let claims = ClaimSet::builder()
///     .issuer("https://ta.example.com")
///     .subject("https://leaf.example.com")
///     .issued_now()
///     .expires_in_secs(3600)
///     .data(data)
///     .add_claim("trust_level", 3)
///     .build();
///
/// let payload = claims.to_payload()?;
/// assert_eq!(payload["trust_level"], 3);
/// assert!(payload.contains_key("metadata"));
/// # Ok::<(), oidfed_md::MetadataError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimSet<T> {
    /// Registered claims.
    pub registered: RegisteredClaims,
    /// Typed data object.
    pub data: Option<T>,
    extension_claims: Map<String, Value>,
    collision_policy: CollisionPolicy,
}

impl<T> ClaimSet<T> {
    /// Create a new builder.
    #[must_use]
    pub fn builder() -> ClaimSetBuilder<T> {
        ClaimSetBuilder::default()
    }

    /// All extension claims.
    #[must_use]
    pub fn extension_claims(&self) -> &Map<String, Value> {
        &self.extension_claims
    }

    /// A single extension claim.
    #[must_use]
    pub fn extension_claim(&self, name: &str) -> Option<&Value> {
        self.extension_claims.get(name)
    }
}

impl<T: TaggableSchema + Serialize> ClaimSet<T> {
    /// Merge registered claims, data object members and extension claims into one payload.
    ///
    /// The data object's language-tagged members are written flat, as
    /// `name` / `name#tag` claims.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::NotAnObject` if the data object does not
    /// serialize to an object, or `MetadataError::ExtensionCollision` when a
    /// member is written twice under the `Reject` policy.
    pub fn to_payload(&self) -> MetadataResult<Map<String, Value>> {
        let mut payload = to_object(&self.registered, "registered claims")?;
        if let Some(data) = &self.data {
            let members = LangJsonSerializer::<T>::new().to_json_object(data)?;
            overlay_extensions(
                &mut payload,
                &members,
                self.collision_policy,
                "claim set data object",
            )?;
        }
        overlay_extensions(
            &mut payload,
            &self.extension_claims,
            self.collision_policy,
            "extension claim",
        )?;
        Ok(payload)
    }
}

impl<T: TaggableSchema + Serialize + DeserializeOwned> ClaimSet<T> {
    /// Split a JWT payload.
    ///
    /// Non-registered members are consolidated with `T`'s declared names and
    /// bound into `T`, which is expected to ignore members it does not know.
    /// Whatever the bound data object does not serialize back to, in its
    /// flat form, is kept as an extension claim.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::Binding` if the registered claims or the data
    /// object cannot be bound.
    #[instrument(skip_all, fields(members = payload.len()))]
    pub fn parse(payload: &Map<String, Value>) -> MetadataResult<Self> {
        let (registered, rest): (Map<String, Value>, Map<String, Value>) = payload
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .partition(|(name, _)| STANDARD_JWT_CLAIMS.contains(&name.as_str()));

        let registered: RegisteredClaims = serde_json::from_value(Value::Object(registered))?;

        let serializer = LangJsonSerializer::<T>::new();
        let data = serializer.parse_object(rest)?;
        let recognized = serializer.to_json_object(&data)?;
        let extension_claims = extension_members(payload, &STANDARD_JWT_CLAIMS, Some(&recognized));

        tracing::debug!(
            recognized = recognized.len(),
            extensions = extension_claims.len(),
            "Parsed claim set"
        );

        Ok(Self {
            registered,
            data: Some(data),
            extension_claims,
            collision_policy: CollisionPolicy::default(),
        })
    }
}

fn to_object<S: Serialize + ?Sized>(value: &S, context: &str) -> MetadataResult<Map<String, Value>> {
    match serde_json::to_value(value).map_err(|e| MetadataError::Serialization(e.to_string()))? {
        Value::Object(members) => Ok(members),
        Value::Null => Ok(Map::new()),
        _ => Err(MetadataError::not_an_object(context)),
    }
}

/// Builder for [`ClaimSet`].
#[derive(Debug)]
pub struct ClaimSetBuilder<T> {
    registered: RegisteredClaims,
    data: Option<T>,
    extension_claims: Map<String, Value>,
    collision_policy: CollisionPolicy,
}

impl<T> Default for ClaimSetBuilder<T> {
    fn default() -> Self {
        Self {
            registered: RegisteredClaims::default(),
            data: None,
            extension_claims: Map::new(),
            collision_policy: CollisionPolicy::default(),
        }
    }
}

impl<T> ClaimSetBuilder<T> {
    /// Set the issuer.
    #[must_use]
    pub fn issuer(mut self, iss: impl Into<String>) -> Self {
        self.registered.iss = Some(iss.into());
        self
    }

    /// Set the subject.
    #[must_use]
    pub fn subject(mut self, sub: impl Into<String>) -> Self {
        self.registered.sub = Some(sub.into());
        self
    }

    /// Set the audience.
    #[must_use]
    pub fn audience(mut self, aud: impl Into<Audience>) -> Self {
        self.registered.aud = Some(aud.into());
        self
    }

    /// Set expiration time as Unix timestamp.
    #[must_use]
    pub fn expiration(mut self, exp: i64) -> Self {
        self.registered.exp = Some(NumericDate::from(exp));
        self
    }

    /// Set expiration time as seconds from now.
    #[must_use]
    pub fn expires_in_secs(mut self, secs: i64) -> Self {
        self.registered.exp = Some(NumericDate::from(Utc::now().timestamp() + secs));
        self
    }

    /// Set expiration time using a Duration.
    #[must_use]
    pub fn expires_in(mut self, duration: Duration) -> Self {
        self.registered.exp = Some(NumericDate::from((Utc::now() + duration).timestamp()));
        self
    }

    /// Set the not-before time.
    #[must_use]
    pub fn not_before(mut self, nbf: i64) -> Self {
        self.registered.nbf = Some(NumericDate::from(nbf));
        self
    }

    /// Set the issued at time.
    #[must_use]
    pub fn issued_at(mut self, iat: i64) -> Self {
        self.registered.iat = Some(NumericDate::from(iat));
        self
    }

    /// Set the issued at time to now.
    #[must_use]
    pub fn issued_now(mut self) -> Self {
        self.registered.iat = Some(NumericDate::now());
        self
    }

    /// Set the JWT ID.
    #[must_use]
    pub fn jwt_id(mut self, jti: impl Into<String>) -> Self {
        self.registered.jti = Some(jti.into());
        self
    }

    /// Set a random v4 UUID as JWT ID.
    #[must_use]
    pub fn generated_jwt_id(mut self) -> Self {
        self.registered.jti = Some(Uuid::new_v4().to_string());
        self
    }

    /// Set the data object.
    #[must_use]
    pub fn data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    /// Add an extension claim. A later value for the same name replaces the earlier one.
    #[must_use]
    pub fn add_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extension_claims.insert(name.into(), value.into());
        self
    }

    /// Set the policy for members written twice by `to_payload`.
    #[must_use]
    pub fn collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    /// Build the claim set.
    #[must_use]
    pub fn build(self) -> ClaimSet<T> {
        ClaimSet {
            registered: self.registered,
            data: self.data,
            extension_claims: self.extension_claims,
            collision_policy: self.collision_policy,
        }
    }
}
