//! # Family Roster
//!
//! Client-local family member profiles with derived BMI. The roster
//! never round-trips through the backend; it is `Serialize`/`Deserialize`
//! so an embedder can persist it wherever it keeps local state.

use serde::{Deserialize, Serialize};

use kitchenhub_core::health::{bmi_category, calc_bmi, BmiCategory};
use kitchenhub_core::MemberId;

use crate::error::ScreenError;

/// Self-reported gender on a profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Other,
    #[default]
    Unspecified,
}

/// Activity level bands used for profile display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Light,
    #[default]
    Moderate,
    Active,
}

/// A family member profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: MemberId,
    pub name: String,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub activity: ActivityLevel,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub dietary: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
}

impl FamilyMember {
    /// A named profile with everything else unset.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(),
            name: name.into(),
            age: None,
            gender: Gender::default(),
            activity: ActivityLevel::default(),
            weight_kg: None,
            height_cm: None,
            allergies: Vec::new(),
            dietary: Vec::new(),
            goals: Vec::new(),
        }
    }

    /// Derived BMI, one decimal; `None` until both measurements exist.
    pub fn bmi(&self) -> Option<f64> {
        match (self.weight_kg, self.height_cm) {
            (Some(weight), Some(height)) => calc_bmi(weight, height),
            _ => None,
        }
    }

    /// Derived BMI band; `None` whenever [`bmi`](Self::bmi) is.
    pub fn bmi_category(&self) -> Option<BmiCategory> {
        bmi_category(self.bmi())
    }
}

/// The household's member list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FamilyRoster {
    members: Vec<FamilyMember>,
}

impl FamilyRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn members(&self) -> &[FamilyMember] {
        &self.members
    }

    pub fn get(&self, id: MemberId) -> Option<&FamilyMember> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Add a member. The name must not be blank; nothing is added when
    /// it is.
    pub fn add(&mut self, mut member: FamilyMember) -> Result<MemberId, ScreenError> {
        member.name = member.name.trim().to_string();
        if member.name.is_empty() {
            return Err(ScreenError::MissingName);
        }
        let id = member.id;
        self.members.push(member);
        Ok(id)
    }

    /// Replace an existing member's profile, keeping its id. Returns
    /// `Ok(false)` when no member has that id.
    pub fn update(&mut self, id: MemberId, mut member: FamilyMember) -> Result<bool, ScreenError> {
        member.name = member.name.trim().to_string();
        if member.name.is_empty() {
            return Err(ScreenError::MissingName);
        }
        match self.members.iter_mut().find(|m| m.id == id) {
            Some(slot) => {
                member.id = id;
                *slot = member;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a member. Returns whether anything was removed.
    pub fn remove(&mut self, id: MemberId) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m.id != id);
        self.members.len() != before
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// The demo roster behind the "load sample data" action.
    pub fn sample() -> Self {
        let mut roster = Self::new();
        let entries: [(&str, u8, Gender, ActivityLevel, f64, f64, &[&str], &[&str], &[&str]); 4] = [
            (
                "John Smith",
                35,
                Gender::Male,
                ActivityLevel::Moderate,
                75.0,
                178.0,
                &["Nuts", "Shellfish"],
                &[],
                &["Weight Loss", "Heart Health"],
            ),
            (
                "Sarah Smith",
                32,
                Gender::Female,
                ActivityLevel::Active,
                62.0,
                165.0,
                &["Dairy"],
                &["Dairy-Free"],
                &["Better Digestion", "Increased Energy"],
            ),
            (
                "Emily Smith",
                8,
                Gender::Female,
                ActivityLevel::Active,
                28.0,
                130.0,
                &["Peanuts"],
                &[],
                &["Healthy Growth"],
            ),
            (
                "Michael Smith",
                65,
                Gender::Male,
                ActivityLevel::Light,
                80.0,
                175.0,
                &[],
                &[],
                &["Lower Cholesterol", "Heart Health", "Diabetes Management"],
            ),
        ];
        for (name, age, gender, activity, weight, height, allergies, dietary, goals) in entries {
            let mut member = FamilyMember::named(name);
            member.age = Some(age);
            member.gender = gender;
            member.activity = activity;
            member.weight_kg = Some(weight);
            member.height_cm = Some(height);
            member.allergies = allergies.iter().map(|s| s.to_string()).collect();
            member.dietary = dietary.iter().map(|s| s.to_string()).collect();
            member.goals = goals.iter().map(|s| s.to_string()).collect();
            // Sample names are never blank, but stay on the validated path.
            if let Err(e) = roster.add(member) {
                tracing::warn!("sample roster entry rejected: {e}");
            }
        }
        roster
    }
}
