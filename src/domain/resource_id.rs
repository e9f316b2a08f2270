use crate::domain::value_objects::ParameterMap;

/// Path parameter names checked first, in order
pub const RESOURCE_ID_CANDIDATES: [&str; 4] = ["id", "resourceId", "itemId", "entityId"];

/// Pull a resource identifier out of the path parameters
///
/// Known names win over the fallback scan, which takes the first entry whose
/// key contains "id" in any case. Empty values never count.
pub fn extract_resource_id(path_params: Option<&ParameterMap>) -> Option<String> {
    let params = path_params?;

    RESOURCE_ID_CANDIDATES
        .iter()
        .filter_map(|name| params.get(name))
        .find(|value| !value.is_empty())
        .or_else(|| {
            params
                .iter()
                .find(|(key, value)| key.to_lowercase().contains("id") && !value.is_empty())
                .map(|(_, value)| value)
        })
        .map(str::to_string)
}
