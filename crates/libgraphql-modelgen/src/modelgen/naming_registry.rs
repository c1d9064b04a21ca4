use crate::modelgen::FragmentKey;
use crate::modelgen::ModelGenError;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

type Result<T> = std::result::Result<T, ModelGenError>;

/// Assigns unique, stable names to generated models.
///
/// The first request for a given key reserves the proposed name, or the
/// proposed name with the smallest free integer suffix (`Name1`, `Name2`,
/// ...). Every later request for that key returns the same name regardless
/// of what is proposed.
#[derive(Clone, Debug)]
pub struct NamingRegistry {
    assigned: HashMap<FragmentKey, String>,
    max_suffix: u32,
    reserved: HashSet<String>,
}
impl NamingRegistry {
    pub fn get_or_create_name(
        &mut self,
        key: &FragmentKey,
        proposed_name: &str,
    ) -> Result<String> {
        if let Some(name) = self.assigned.get(key) {
            return Ok(name.to_owned());
        }

        let name = self.first_free_name(proposed_name)?;
        log::trace!("Reserved the name `{name}` (proposed `{proposed_name}`).");
        self.reserved.insert(name.to_owned());
        self.assigned.insert(key.to_owned(), name.to_owned());
        Ok(name)
    }

    /// The name previously assigned to `key`, if any.
    pub fn name_of(&self, key: &FragmentKey) -> Option<&str> {
        self.assigned.get(key).map(String::as_str)
    }

    pub fn new() -> Self {
        Self::with_max_suffix(u32::MAX)
    }

    /// Every name reserved so far.
    pub fn reserved_names(&self) -> &HashSet<String> {
        &self.reserved
    }

    pub fn with_max_suffix(max_suffix: u32) -> Self {
        Self {
            assigned: HashMap::new(),
            max_suffix,
            reserved: HashSet::new(),
        }
    }

    fn first_free_name(&self, proposed_name: &str) -> Result<String> {
        if !self.reserved.contains(proposed_name) {
            return Ok(proposed_name.to_string());
        }

        (1..=self.max_suffix)
            .map(|suffix| format!("{proposed_name}{suffix}"))
            .find(|candidate| !self.reserved.contains(candidate))
            .ok_or_else(|| ModelGenError::NamingExhausted {
                proposed_name: proposed_name.to_string(),
                max_suffix: self.max_suffix,
            })
    }
}
impl Default for NamingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`NamingRegistry`] shared by several compilations so that models of
/// different documents land in one collision-free namespace.
///
/// Compilations are serialized on the registry's lock per name request; the
/// names each compilation receives then depend on how the compilations
/// interleave.
#[derive(Clone, Debug, Default)]
pub struct SharedNamingRegistry(Arc<Mutex<NamingRegistry>>);
impl SharedNamingRegistry {
    pub fn get_or_create_name(
        &self,
        key: &FragmentKey,
        proposed_name: &str,
    ) -> Result<String> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_create_name(key, proposed_name)
    }

    pub fn new(registry: NamingRegistry) -> Self {
        Self(Arc::new(Mutex::new(registry)))
    }

    /// A snapshot of every name reserved so far.
    pub fn reserved_names(&self) -> HashSet<String> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .reserved_names()
            .to_owned()
    }
}

/// `hero_friends` / `heroFriends` -> `HeroFriends`.
pub(crate) fn pascal_case(name: &str) -> String {
    name.split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}
