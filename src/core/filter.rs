use crate::domain::model::Breed;

/// 名稱包含查詢字串（不分大小寫）即符合；空字串回傳完整清單
pub fn filter_breeds(breeds: &[Breed], query: &str) -> Vec<Breed> {
    if query.is_empty() {
        return breeds.to_vec();
    }

    let needle = query.to_lowercase();
    breeds
        .iter()
        .filter(|breed| breed.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
