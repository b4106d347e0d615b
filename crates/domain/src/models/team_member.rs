//! Team member profiles (CMS).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::content::CmsRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    pub visible: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed_at: Option<DateTime<Utc>>,
}

impl CmsRecord for TeamMember {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
    fn visible(&self) -> bool {
        self.visible
    }
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
    fn removed_at(&self) -> Option<DateTime<Utc>> {
        self.removed_at
    }
    fn set_removed_at(&mut self, removed_at: Option<DateTime<Utc>>) {
        self.removed_at = removed_at;
    }
    fn stamp_created(&mut self, now: DateTime<Utc>) {
        self.created_at = now;
        self.updated_at = now;
    }
    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

/// Request payload for adding a team member.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamMemberRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    pub role: Option<String>,
    pub photo: Option<String>,
    pub phone: Option<String>,
    pub telegram: Option<String>,

    #[serde(default = "default_visible")]
    pub visible: bool,

    #[serde(default)]
    pub sort_order: i32,
}

fn default_visible() -> bool {
    true
}

impl CreateTeamMemberRequest {
    pub fn into_member(self) -> TeamMember {
        TeamMember {
            id: 0,
            name: self.name,
            role: self.role,
            photo: self.photo,
            phone: self.phone,
            telegram: self.telegram,
            visible: self.visible,
            sort_order: self.sort_order,
            created_at: DateTime::<Utc>::MIN_UTC,
            updated_at: DateTime::<Utc>::MIN_UTC,
            removed_at: None,
        }
    }
}

/// Request payload for updating a team member (partial update).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamMemberRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    pub role: Option<String>,
    pub photo: Option<String>,
    pub phone: Option<String>,
    pub telegram: Option<String>,
    pub sort_order: Option<i32>,
}

impl UpdateTeamMemberRequest {
    pub fn apply(&self, member: &mut TeamMember) {
        if let Some(name) = &self.name {
            member.name = name.clone();
        }
        if let Some(role) = &self.role {
            member.role = Some(role.clone());
        }
        if let Some(photo) = &self.photo {
            member.photo = Some(photo.clone());
        }
        if let Some(phone) = &self.phone {
            member.phone = Some(phone.clone());
        }
        if let Some(telegram) = &self.telegram {
            member.telegram = Some(telegram.clone());
        }
        if let Some(sort_order) = self.sort_order {
            member.sort_order = sort_order;
        }
    }
}
