use chrono::NaiveDate;
use models::Post;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn post(id: u64, title: &str, content: &str, author: &str, date: NaiveDate) -> Post {
    Post {
        id,
        title: Some(title.to_string()),
        content: Some(content.to_string()),
        author: Some(author.to_string()),
        date,
    }
}

/// Posts present in a freshly started API process.
pub fn default_posts() -> Vec<Post> {
    vec![
        post(
            1,
            "The Rise of Decentralized Finance",
            "Decentralized Finance (DeFi) is an emerging and rapidly evolving field in the \
             blockchain industry. It refers to the shift from traditional, centralized financial \
             systems to peer-to-peer finance enabled by decentralized technologies built on \
             Ethereum and other blockchains.",
            "Alex Thompson",
            day(2023, 8, 1),
        ),
        post(
            2,
            "The Impact of Artificial Intelligence on Modern Businesses",
            "Artificial Intelligence (AI) is no longer a concept of the future. It's very much \
             a part of our present, reshaping industries and enhancing the capabilities of \
             existing systems.",
            "Mia Williams",
            day(2023, 8, 5),
        ),
        post(
            3,
            "Sustainable Living: Tips for an Eco-Friendly Lifestyle",
            "Sustainability is more than just a buzzword; it's a way of life. From reducing \
             plastic use to embracing a plant-based diet, small changes add up.",
            "Samuel Green",
            day(2023, 8, 10),
        ),
    ]
}
