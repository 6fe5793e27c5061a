//! Hard-coded content of the site. Every accessor returns the same records on
//! every call; nothing here is ever mutated.

use crate::domain::{Category, ChartEntry, Commitment, CountryMetric, FeatureCard, Obstacle, Pledge};

pub const SITE_TITLE: &str = "Base Bharat";
pub const HERO_TITLE: [&str; 2] = ["Dear Builders of Bharat,", "the Future Is Yours."];
pub const HERO_SUBTITLE: &str = "From Bharat to the World: Build Rockets of Innovation.";
pub const COURSE_TITLE: &str = "Navigate the Obstacles";
pub const COURSE_INTRO: &str = "Every innovation journey faces challenges. Scroll down to discover how India's builders overcome common obstacles in the deep tech ecosystem.";
pub const LEADERBOARD_TITLE: &str = "Global Tech Leaderboard";
pub const LEADERBOARD_SUBTITLE: &str = "How India compares globally in Deep Tech innovation";
pub const LEADERBOARD_DISCLAIMER: &str = "Data is based on 2024-2025 industry reports and may vary by source. Metrics represent either absolute values or growth percentages depending on category.";
pub const PLEDGE_TITLE: &str = "The Pledge Wall";
pub const PLEDGE_QUOTE: &str = "\"Each Thought is a Spark. Together, We Ignite Change.\"";
pub const PLEDGE_INVITE: &str = "Share your deep-tech dream for India. Add your voice to the wall.";
pub const PLEDGE_EMPTY: &str = "No pledges yet. Be the first to make one!";
pub const MOVEMENT_TITLE: &str = "Join the Movement";
pub const MOVEMENT_INTRO: &str = "By adding your pledge, you're joining a nationwide movement of innovators committed to breakthrough technologies. Your pledge represents your commitment to:";
pub const FOOTER_TAGLINE: &str = "Builders of the Future";
pub const FOOTER_LINKS: [&str; 3] = ["Terms", "Privacy", "Contact"];

const OBSTACLES: [Obstacle; 5] = [
    Obstacle {
        id: "funding",
        title: "Funding Gaps",
        description: "Early-stage deep tech startups in India face challenges securing capital due to longer development cycles and higher risk profiles compared to software startups.",
        solution_title: "PLI Schemes & Venture Funding",
        solution: "Government Production Linked Incentive (PLI) schemes offer $26 billion across tech sectors. Additionally, dedicated deep tech venture funds like Bharat Innovation Fund and specialized accelerators are emerging to bridge early funding gaps.",
    },
    Obstacle {
        id: "talent",
        title: "Brain Drain",
        description: "India produces exceptional technical talent, but many top engineers and researchers move abroad for better opportunities and compensation.",
        solution_title: "Research Incentives & Returnship Programs",
        solution: "Initiatives like the Startup India Seed Fund, NIDHI programs, and corporate-backed innovation labs provide researchers with grants to commercialize their work. Returnship programs and improved compensation structures are bringing back talent from abroad.",
    },
    Obstacle {
        id: "infrastructure",
        title: "Infrastructure Challenges",
        description: "Specialized facilities, testing infrastructure, and manufacturing capabilities necessary for hardware development are limited compared to software resources.",
        solution_title: "ISRO Collaborations & Tech Parks",
        solution: "ISRO's technology transfer program has opened up aerospace technologies to startups. New specialized hardware incubators like Maker Village and hardware-focused technology parks provide testing facilities, prototyping tools, and manufacturing support.",
    },
    Obstacle {
        id: "regulatory",
        title: "Regulatory Hurdles",
        description: "Lengthy compliance processes, certifications, and unclear regulatory frameworks slow down innovation, especially in highly regulated sectors.",
        solution_title: "Regulatory Sandboxes",
        solution: "Regulatory sandboxes by RBI, SEBI, and IRDAI allow controlled testing of innovations. New streamlined approval processes for drones, space technologies, and healthtech are reducing time-to-market for regulated products.",
    },
    Obstacle {
        id: "market",
        title: "Market Access Barriers",
        description: "Deep tech products often require significant customer education, face longer sales cycles, and struggle with early adoption in conservative enterprise markets.",
        solution_title: "Government Procurement Channels",
        solution: "The Government e-Marketplace (GeM) now has a dedicated Startup Runway section for procurement from startups. Defense and space sectors have opened up procurement channels for private innovation through iDEX and IN-SPACe initiatives.",
    },
];

const COUNTRIES: [CountryMetric; 4] = [
    CountryMetric {
        name: "India",
        color: "#ff9f40",
        ev: 38,
        ev_description: "38% annual growth rate in EV market with 2-wheeler segment leading the transition",
        quantum: 48,
        quantum_description: "48% increase in quantum computing research papers in the last 3 years",
        space: 27,
        space_description: "27 successful satellite launches in 2024, up from 19 in 2023",
        ai: 150,
        ai_description: "150+ AI startups received funding exceeding $1M in 2024",
    },
    CountryMetric {
        name: "USA",
        color: "#4795ec",
        ev: 47,
        ev_description: "47% annual growth rate in EV adoption with robust charging infrastructure",
        quantum: 92,
        quantum_description: "92% of global quantum computing patents, dominated by tech giants",
        space: 45,
        space_description: "45 commercial launches in 2024 with SpaceX leading the industry",
        ai: 380,
        ai_description: "380+ AI startups funded with focus on enterprise solutions",
    },
    CountryMetric {
        name: "China",
        color: "#f44336",
        ev: 51,
        ev_description: "51% of global EV production with strong government mandates",
        quantum: 65,
        quantum_description: "65% increase in quantum research funding with focus on quantum communications",
        space: 38,
        space_description: "38 launches with emphasis on lunar and Mars exploration programs",
        ai: 310,
        ai_description: "310 AI startups funded with strong focus on surveillance and automation applications",
    },
    CountryMetric {
        name: "EU",
        color: "#4caf50",
        ev: 42,
        ev_description: "42% annual growth with strong regulatory incentives for EV adoption",
        quantum: 76,
        quantum_description: "76 research centers focused on quantum technologies across member states",
        space: 22,
        space_description: "22 launches through Arianespace with focus on climate and communication satellites",
        ai: 220,
        ai_description: "220 AI startups funded with emphasis on ethical AI frameworks",
    },
];

const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        title: "Innovation Hub",
        body: "Explore cutting-edge technologies where India has strategic advantages and witness how they're shaping the future of the global tech landscape.",
        accent: "#ff9933",
        delay_ms: 0,
    },
    FeatureCard {
        title: "Path to Success",
        body: "Navigate through common challenges faced by Indian startups and discover proven solutions and support systems that help overcome obstacles.",
        accent: "#60a5fa",
        delay_ms: 200,
    },
    FeatureCard {
        title: "Global Impact",
        body: "See how India is competing on the world stage in deep tech sectors and making its mark through groundbreaking innovations and collaborations.",
        accent: "#4ade80",
        delay_ms: 400,
    },
];

const COMMITMENTS: [Commitment; 4] = [
    Commitment {
        text: "Solving India's unique challenges through deep technology",
        color: "#3b82f6",
    },
    Commitment {
        text: "Building globally competitive products and services born in India",
        color: "#a855f7",
    },
    Commitment {
        text: "Collaborating with innovators, researchers, and initiatives",
        color: "#22c55e",
    },
    Commitment {
        text: "Contributing to India's vision of becoming a global tech leader",
        color: "#eab308",
    },
];

pub const fn obstacles() -> &'static [Obstacle] {
    &OBSTACLES
}

pub const fn countries() -> &'static [CountryMetric] {
    &COUNTRIES
}

pub const fn feature_cards() -> &'static [FeatureCard] {
    &FEATURE_CARDS
}

pub const fn commitments() -> &'static [Commitment] {
    &COMMITMENTS
}

/// Bars for the leaderboard chart, one per country in dataset order.
pub fn chart_data(category: Category) -> Vec<ChartEntry> {
    COUNTRIES
        .iter()
        .map(|country| ChartEntry {
            name: country.name,
            value: country.score(category),
            color: country.color,
            description: country.description(category),
        })
        .collect()
}

/// The pledges the wall starts with on every launch.
pub fn starter_pledges() -> Vec<Pledge> {
    let seed = |id: u64, name: &str, idea: &str, x: f32, y: f32, size: f32, brightness: f32| {
        Pledge {
            id,
            name: name.to_string(),
            idea: idea.to_string(),
            x,
            y,
            size,
            brightness,
        }
    };

    vec![
        seed(
            1,
            "Quantum Bharat",
            "Building quantum secure communication networks for critical infrastructure",
            25.0,
            30.0,
            3.0,
            0.9,
        ),
        seed(
            2,
            "AgroSpace",
            "Satellite imaging for precision agriculture to boost farm yields",
            70.0,
            45.0,
            2.5,
            0.8,
        ),
        seed(
            3,
            "BharatEV",
            "Solar-powered EV charging stations for rural India",
            40.0,
            60.0,
            3.2,
            1.0,
        ),
        seed(
            4,
            "NeuroVeda",
            "AI for ancient Ayurvedic knowledge digitization and modern medical research",
            80.0,
            70.0,
            2.8,
            0.85,
        ),
        seed(
            5,
            "DroneGuru",
            "Developing autonomous drones for disaster response in remote regions",
            55.0,
            20.0,
            2.2,
            0.75,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantum_category_exposes_expected_values() {
        let values: Vec<(&str, u32)> = chart_data(Category::Quantum)
            .iter()
            .map(|entry| (entry.name, entry.value))
            .collect();

        assert_eq!(
            values,
            vec![("India", 48), ("USA", 92), ("China", 65), ("EU", 76)]
        );
    }

    #[test]
    fn chart_entries_carry_category_descriptions() {
        let entries = chart_data(Category::Space);
        assert_eq!(entries[0].description, COUNTRIES[0].space_description);
        assert_eq!(entries[3].color, "#4caf50");
    }

    #[test]
    fn every_obstacle_has_a_paired_solution() {
        assert_eq!(obstacles().len(), 5);
        for obstacle in obstacles() {
            assert!(!obstacle.solution_title.is_empty(), "{}", obstacle.id);
            assert!(!obstacle.solution.is_empty(), "{}", obstacle.id);
        }
    }

    #[test]
    fn obstacle_ids_are_unique() {
        let mut ids: Vec<&str> = obstacles().iter().map(|obstacle| obstacle.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), obstacles().len());
    }

    #[test]
    fn starter_wall_has_five_valid_pledges() {
        let pledges = starter_pledges();
        assert_eq!(pledges.len(), 5);
        assert_eq!(pledges[0].name, "Quantum Bharat");
        assert!(pledges
            .iter()
            .all(|pledge| !pledge.name.trim().is_empty() && !pledge.idea.trim().is_empty()));
    }

    #[test]
    fn country_colors_are_valid_hex() {
        for country in countries() {
            assert!(crate::domain::parse_hex_color(country.color).is_some());
        }
    }
}
