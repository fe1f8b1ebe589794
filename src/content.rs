//! Static copy for every section of the site.

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Lightbulb,
    Code,
    Users,
    Book,
    Skull,
    Star,
    Trophy,
    Award,
    Medal,
    Link,
}

impl Icon {
    /// Single-glyph stand-in rendered inside the icon badge.
    pub fn symbol(&self) -> &'static str {
        match self {
            Icon::Lightbulb => "💡",
            Icon::Code => "</>",
            Icon::Users => "👥",
            Icon::Book => "📖",
            Icon::Skull => "💀",
            Icon::Star => "★",
            Icon::Trophy => "🏆",
            Icon::Award => "🎖",
            Icon::Medal => "🏅",
            Icon::Link => "🔗",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: Icon::Lightbulb,
        title: "Enigmatic Challenges",
        description: "Tackle coding mysteries and puzzles that will test your problem-solving skills in ways you never expected.",
    },
    Feature {
        icon: Icon::Code,
        title: "Cryptic Coding",
        description: "Learn to code with ciphers and develop solutions to unravel the secrets hidden within the digital realm.",
    },
    Feature {
        icon: Icon::Users,
        title: "Mysterious Networking",
        description: "Connect with fellow investigators and mentors who will guide you through the fog of technological uncertainty.",
    },
];

pub const JOURNAL_ENTRY: &str = "JOURNAL ENTRY #618";
pub const JOURNAL_TITLE: &str = "Why Join HexaFalls?";
pub const JOURNAL_PARAGRAPHS: [&str; 3] = [
    "In the mysterious town of DigitalFalls, where the veil between technology and the supernatural is thin, we invite courageous developers to join us for a weekend of coding, cryptography, and uncanny creativity.",
    "Whether you're a seasoned developer or just beginning your coding journey, HexaFalls offers a unique chance to push the boundaries of what's possible when imagination meets innovation.",
    "With prizes worth over a lakh, workshops led by industry experts, and networking opportunities with leading tech companies, this is your chance to make your mark in the unexplored territories of the digital dimension.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    /// Themes with a link open the cipher explorer.
    pub links_to_explorer: bool,
}

pub const THEMES: [Theme; 4] = [
    Theme {
        icon: Icon::Lightbulb,
        title: "Anomalies & Algorithms",
        description: "Build projects that detect, analyze, or simulate paranormal activity using data algorithms and machine learning.",
        image: "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?auto=format&fit=crop&w=1200&q=80",
        links_to_explorer: false,
    },
    Theme {
        icon: Icon::Book,
        title: "Journal Projects",
        description: "Create digital interactive journals, encryption systems, or knowledge repositories inspired by the journals from Gravity Falls.",
        image: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?auto=format&fit=crop&w=1200&q=80",
        links_to_explorer: false,
    },
    Theme {
        icon: Icon::Skull,
        title: "Supernatural Systems",
        description: "Develop applications that bridge the gap between technology and the supernatural, like ghost detectors, creature catalogs, or parallel world simulators.",
        image: "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?auto=format&fit=crop&w=1200&q=80",
        links_to_explorer: false,
    },
    Theme {
        icon: Icon::Star,
        title: "Bill Cipher Explorer",
        description: "Interact with our 3D Bill Cipher model. Click, drag, and zoom to discover the secrets of the dream demon himself!",
        image: "https://images.unsplash.com/photo-1518770660439-4636190af475?auto=format&fit=crop&w=1200&q=80",
        links_to_explorer: true,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Gold,
    Silver,
    Bronze,
}

impl Tier {
    pub fn class(&self) -> &'static str {
        match self {
            Tier::Gold => "tier-gold",
            Tier::Silver => "tier-silver",
            Tier::Bronze => "tier-bronze",
        }
    }

    pub fn accent(&self) -> &'static str {
        match self {
            Tier::Gold => "#F9B72B",
            Tier::Silver => "#C0C0C0",
            Tier::Bronze => "#CD7F32",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrizeTier {
    pub icon: Icon,
    pub title: &'static str,
    pub cash: &'static str,
    pub goodies: &'static str,
    pub tier: Tier,
}

pub const PRIZE_TIERS: [PrizeTier; 3] = [
    PrizeTier {
        icon: Icon::Trophy,
        title: "1st Prize",
        cash: "30k",
        goodies: "25k",
        tier: Tier::Gold,
    },
    PrizeTier {
        icon: Icon::Award,
        title: "2nd Prize",
        cash: "20k",
        goodies: "15k",
        tier: Tier::Silver,
    },
    PrizeTier {
        icon: Icon::Medal,
        title: "3rd Prize",
        cash: "15k",
        goodies: "10k",
        tier: Tier::Bronze,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpecialAward {
    pub icon: Icon,
    pub title: &'static str,
    pub amount: &'static str,
    pub description: &'static str,
}

pub const SPECIAL_AWARDS: [SpecialAward; 4] = [
    SpecialAward {
        icon: Icon::Lightbulb,
        title: "Most Innovative",
        amount: "5k",
        description: "For the project that thinks outside the box with a truly unique approach.",
    },
    SpecialAward {
        icon: Icon::Award,
        title: "Best UI/UX",
        amount: "5k",
        description: "For the most visually stunning and user-friendly project.",
    },
    SpecialAward {
        icon: Icon::Trophy,
        title: "Best Rookie Team",
        amount: "5k",
        description: "For the most impressive project by first-time hackathon participants.",
    },
    SpecialAward {
        icon: Icon::Medal,
        title: "Mystery Choice",
        amount: "???",
        description: "A special prize with mysterious criteria, revealed during the event.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleEvent {
    pub time: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub location: &'static str,
}

pub const SCHEDULE: [&[ScheduleEvent]; 3] = [DAY_ONE, DAY_TWO, DAY_THREE];

const DAY_ONE: &[ScheduleEvent] = &[
    ScheduleEvent {
        time: "10:00 AM - 11:00 AM",
        title: "Registration & Welcome",
        description: "Check-in, get your badge, and prepare for the mysterious journey ahead.",
        location: "Main Hall",
    },
    ScheduleEvent {
        time: "11:00 AM - 12:00 PM",
        title: "Opening Ceremony",
        description: "Meet the organizers, learn the rules, and discover this year's secret theme.",
        location: "Mystery Theater",
    },
    ScheduleEvent {
        time: "12:00 PM - 1:30 PM",
        title: "Lunch & Team Formation",
        description: "Find your fellow investigators and form your coding detective squad.",
        location: "Cafeteria",
    },
    ScheduleEvent {
        time: "1:30 PM - 3:00 PM",
        title: "Workshop: Cryptography Basics",
        description: "Learn the art of encoding and decoding messages in your applications.",
        location: "Workshop Room A",
    },
    ScheduleEvent {
        time: "3:30 PM - 5:00 PM",
        title: "Workshop: API Mysteries",
        description: "Discover the hidden powers of APIs and how to integrate them into your project.",
        location: "Workshop Room B",
    },
    ScheduleEvent {
        time: "5:00 PM - Late",
        title: "Hacking Begins",
        description: "Your team's journey into the unknown starts now. May the code be with you!",
        location: "Hacking Spaces",
    },
];

const DAY_TWO: &[ScheduleEvent] = &[
    ScheduleEvent {
        time: "8:00 AM - 9:00 AM",
        title: "Breakfast",
        description: "Fuel up for another day of innovative coding and problem-solving.",
        location: "Cafeteria",
    },
    ScheduleEvent {
        time: "10:00 AM - 11:30 AM",
        title: "Workshop: UI Dark Arts",
        description: "Master the mystical techniques of creating captivating user interfaces.",
        location: "Workshop Room A",
    },
    ScheduleEvent {
        time: "12:00 PM - 1:30 PM",
        title: "Lunch & Mentor Matching",
        description: "Connect with industry experts who can guide your project to success.",
        location: "Cafeteria & Lounge",
    },
    ScheduleEvent {
        time: "2:00 PM - 3:30 PM",
        title: "Mid-Hackathon Challenge",
        description: "A surprise coding challenge with bonus prizes for the quickest solvers.",
        location: "Mystery Theater",
    },
    ScheduleEvent {
        time: "4:00 PM - 5:00 PM",
        title: "Tech Talk: Future of AI",
        description: "Explore the enigmatic potential of artificial intelligence in tomorrow's world.",
        location: "Lecture Hall",
    },
    ScheduleEvent {
        time: "6:00 PM - 7:30 PM",
        title: "Dinner & Networking",
        description: "Share your progress while enjoying a meal with fellow hackers and sponsors.",
        location: "Cafeteria",
    },
];

const DAY_THREE: &[ScheduleEvent] = &[
    ScheduleEvent {
        time: "8:00 AM - 9:00 AM",
        title: "Breakfast",
        description: "The final countdown begins. Grab some food and prepare for submission.",
        location: "Cafeteria",
    },
    ScheduleEvent {
        time: "11:00 AM - 12:00 PM",
        title: "Submission Deadline",
        description: "All projects must be submitted by this time. No exceptions!",
        location: "Online Platform",
    },
    ScheduleEvent {
        time: "12:00 PM - 1:30 PM",
        title: "Lunch & Presentation Prep",
        description: "Finalize your demo and practice your pitch while enjoying lunch.",
        location: "Cafeteria & Team Spaces",
    },
    ScheduleEvent {
        time: "2:00 PM - 4:00 PM",
        title: "Project Showcase",
        description: "Present your mysterious creation to judges and fellow participants.",
        location: "Exhibition Hall",
    },
    ScheduleEvent {
        time: "4:30 PM - 5:30 PM",
        title: "Closing Ceremony & Awards",
        description: "Discover which teams unraveled the mysteries most effectively and win prizes!",
        location: "Mystery Theater",
    },
];

/// Events for a 1-based day number.
pub fn schedule_for(day: usize) -> &'static [ScheduleEvent] {
    day.checked_sub(1)
        .and_then(|index| SCHEDULE.get(index))
        .copied()
        .unwrap_or(&[])
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SponsorGroup {
    pub tier: Tier,
    pub heading: &'static str,
    pub names: &'static [&'static str],
}

pub const SPONSORS: [SponsorGroup; 3] = [
    SponsorGroup {
        tier: Tier::Gold,
        heading: "Gold Sponsors",
        names: &["Cipher Systems", "Mystery Tech", "Enigma Labs"],
    },
    SponsorGroup {
        tier: Tier::Silver,
        heading: "Silver Sponsors",
        names: &["Cryptic Cloud", "Quantum Code", "Arcane AI", "Northwest Technologies"],
    },
    SponsorGroup {
        tier: Tier::Bronze,
        heading: "Bronze Sponsors",
        names: &[
            "Mindscape",
            "Rune Digital",
            "Pine Software",
            "Journal Frameworks",
            "Triangle Solutions",
            "Eye Security",
        ],
    },
];

pub const COLLABORATION_POINTS: [(Icon, &str); 4] = [
    (Icon::Users, "Form teams of up to 4 investigators"),
    (Icon::Link, "Connect with mentors and industry pros"),
    (Icon::Lightbulb, "Brainstorm on mysterious challenges"),
    (Icon::Code, "Code together to unravel the unknown"),
];

/// Venue areas as (name, purpose).
pub const VENUE_ZONES: [(&str, &str); 4] = [
    ("Mystery Shack", "Main Hacking Area"),
    ("Greasy's Diner", "Dining & Refreshments"),
    ("Bottomless Pit", "Relaxation Zone"),
    ("Bunker", "Presentation Area"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Person {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const SPEAKERS: [Person; 4] = [
    Person {
        name: "Stanford Pines",
        role: "Keynote Speaker",
        company: "Gravity Falls Institute of Oddology",
        description: "Six-fingered author of the journals and interdimensional traveler. Expert in quantum computing and paranormal programming paradigms.",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&w=600&q=80",
    },
    Person {
        name: "Fiddleford McGucket",
        role: "Workshop Leader",
        company: "McGucket Labs",
        description: "Eccentric inventor and robotics genius. Will be leading our hardware hacking workshop and sharing insights on building anomaly detection devices.",
        image: "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?auto=format&fit=crop&w=600&q=80",
    },
    Person {
        name: "Mabel Pines",
        role: "UX/UI Workshop",
        company: "Sweater Weather Designs",
        description: "Creative design expert specializing in colorful, user-friendly interfaces. Will teach you how to make your projects pop with personality.",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&w=600&q=80",
    },
    Person {
        name: "Dipper Pines",
        role: "Workshop Leader",
        company: "Mystery Hunters Alliance",
        description: "Researcher and problem solver extraordinaire. Will be leading sessions on logical thinking, debugging, and methodical approaches to coding mysteries.",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&w=600&q=80",
    },
];

pub const JUDGES: [Person; 4] = [
    Person {
        name: "Wendy Corduroy",
        role: "Judge",
        company: "Gravity Coders Collective",
        description: "Cool-headed tech lead with a sharp eye for practical solutions and real-world applications. Looking for projects with both style and substance.",
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&w=600&q=80",
    },
    Person {
        name: "Soos Ramirez",
        role: "Judge",
        company: "Ramirez Repair & Tech",
        description: "Handyman extraordinaire with a passion for gaming and fixing complex systems. Appreciates technical creativity and unconventional approaches.",
        image: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?auto=format&fit=crop&w=600&q=80",
    },
    Person {
        name: "Bill Cipher",
        role: "Mystery Judge",
        company: "Interdimensional Affairs",
        description: "Interdimensional being with an eye for detail. Criteria for judging remain shrouded in mystery. Approach with caution and don't make any deals!",
        image: "https://images.unsplash.com/photo-1531384441138-2736e62e0919?auto=format&fit=crop&w=600&q=80",
    },
    Person {
        name: "Pacifica Northwest",
        role: "Judge",
        company: "Northwest Ventures",
        description: "Venture capital representative with high standards for polish and presentation. Looking for projects with commercial potential and refined user experience.",
        image: "https://images.unsplash.com/photo-1580489944761-15a19d654956?auto=format&fit=crop&w=600&q=80",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub image: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        quote: "HexaFalls was unlike any hackathon I've ever attended. The mysterious themes pushed our creativity to new dimensions, and the atmosphere was electric with innovation!",
        name: "Alex Chen",
        role: "Software Developer",
        company: "Tech Anomalies Inc.",
        image: "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?auto=format&fit=crop&w=300&q=80",
    },
    Testimonial {
        quote: "The mentors were incredible - they guided us through the toughest challenges without giving away the solutions. I learned more in 48 hours than I would in months of regular coding.",
        name: "Jordan Taylor",
        role: "CS Student",
        company: "Backupsmore University",
        image: "https://images.unsplash.com/photo-1527980965255-d3b416303d12?auto=format&fit=crop&w=300&q=80",
    },
    Testimonial {
        quote: "The paranormal themes were a refreshing change from typical hackathons. Our team built a cryptography system inspired by the journals that actually caught the attention of a major tech company!",
        name: "Sarah Johnson",
        role: "Frontend Developer",
        company: "Cipher Systems",
        image: "https://images.unsplash.com/photo-1580489944761-15a19d654956?auto=format&fit=crop&w=300&q=80",
    },
    Testimonial {
        quote: "I came to HexaFalls knowing nothing about AR development. Thanks to the amazing workshops and collaborative environment, our team created an augmented reality monster detector that won third place!",
        name: "Miguel Hernandez",
        role: "Game Developer",
        company: "Reality Benders",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&w=300&q=80",
    },
];

pub const FAQS: [(&str, &str); 8] = [
    (
        "What is HexaFalls?",
        "HexaFalls is a weekend-long coding event where participants ('hackers') collaborate in teams to build innovative software or hardware projects from scratch. It's inspired by the mysteries and supernatural elements from the town of Gravity Falls, creating a unique, immersive experience beyond traditional hackathons.",
    ),
    (
        "Do I need to be an experienced programmer?",
        "Not at all! HexaFalls welcomes participants of all skill levels. Whether you're a coding novice or an experienced developer, there's a place for you here. We offer workshops and mentorship to help beginners get started and provide challenging opportunities for experts.",
    ),
    (
        "What should I bring?",
        "You should bring your laptop, charger, any hardware you plan to work with, a change of clothes, toiletries, and your curiosity! We'll provide food, drinks, snacks, and a mysterious atmosphere conducive to coding and creativity.",
    ),
    (
        "How are teams formed?",
        "You can form a team of up to 4 people before the event or join a team during our team formation activities. Solo participants will have opportunities to meet others and form teams. Remember, the best teams often combine diverse skills and perspectives!",
    ),
    (
        "Is there a fee to participate?",
        "HexaFalls is completely free for all accepted participants! Thanks to our mysterious backers and sponsors, we can provide meals, snacks, swag, and prizes without any registration fees.",
    ),
    (
        "What are the judging criteria?",
        "Projects will be judged on innovation, technical difficulty, design/user experience, and thematic integration with this year's mystery theme (revealed at the opening ceremony). Our panel of judges includes industry experts and representatives from our sponsor companies.",
    ),
    (
        "Can I start working on my project before the hackathon?",
        "All code and design work must be created during the hackathon period. You can come with ideas and plans, but the actual building must start when the hacking period begins. Don't worry, that's part of the challenge and fun!",
    ),
    (
        "What if I encounter supernatural phenomena during the event?",
        "Document it thoroughly in your journal, avoid making deals with triangular beings, and report any anomalies to our dedicated Mystery Management team. Remember: when in doubt, trust no one and code defensively!",
    ),
];

/// In-page link: label and the id of the section it scrolls to.
pub type SectionLink = (&'static str, &'static str);

pub const NAV_LINKS: [SectionLink; 7] = [
    ("About", "about"),
    ("Themes", "themes"),
    ("Prizes", "prizes"),
    ("Sponsors", "sponsors"),
    ("Speakers", "speakers-judges"),
    ("Feedback", "feedback"),
    ("FAQ", "faq"),
];

pub const MOBILE_NAV_LINKS: [SectionLink; 5] = [
    ("About", "about"),
    ("Schedule", "schedule"),
    ("Register", "register"),
    ("Sponsors", "sponsors"),
    ("FAQ", "faq"),
];

pub const FOOTER_SITEMAP: [SectionLink; 5] = [
    ("About", "about"),
    ("Themes", "themes"),
    ("Prizes", "prizes"),
    ("Schedule", "schedule"),
    ("Register", "register"),
];

pub const FOOTER_COMMUNITY: [SectionLink; 5] = [
    ("Sponsors", "sponsors"),
    ("Collaboration", "collaboration"),
    ("Speakers & Judges", "speakers-judges"),
    ("Feedback", "feedback"),
    ("FAQ", "faq"),
];

pub const SOCIAL_LINKS: [(&str, &str, &str); 4] = [
    ("Twitter", "𝕏", "#"),
    ("Facebook", "f", "#"),
    ("Instagram", "◎", "#"),
    ("GitHub", "⌥", "#"),
];

/// Every section id the home page renders, in page order.
#[cfg(test)]
pub const SECTION_IDS: [&str; 11] = [
    "hero",
    "about",
    "themes",
    "prizes",
    "schedule",
    "register",
    "sponsors",
    "collaboration",
    "speakers-judges",
    "feedback",
    "faq",
];

pub const EXPLORER_ABOUT: [&str; 2] = [
    "Bill Cipher is a triangular dream demon formerly existent only in the mindscape who wished to gain access to the real world. He had been running amok in Gravity Falls, Oregon since being summoned by Stanford Pines over thirty years ago.",
    "Bill is a triangle with a single large eye rimmed with four short lashes on the top and bottom. He has a thin bowtie-like shape just below his eye, and wears a tall, thin top hat that floats just above his head. His body is two-dimensional and yellow in color.",
];
pub const EXPLORER_QUOTE: &str =
    "\"Remember: reality is an illusion, the universe is a hologram, buy gold, BYE!\"";
pub const CAESAR_MESSAGE: &str = "ZHOFRPH WR JUDYLWBKDFN";
pub const CAESAR_EXPLANATION: &str = "Bill Cipher often speaks in codes and riddles. This message is encrypted with the Caesar cipher, a simple substitution cipher where each letter is shifted a certain number of places in the alphabet.";
pub const CAESAR_HINT: &str =
    "Hint: Shift three letters back to decode the message. What secret does it reveal?";

pub fn copyright(year: i32) -> String {
    format!("© {} {}. All secrets reserved.", year, config::EVENT_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prize_tiers_carry_literal_amounts() {
        let rows: Vec<(&str, &str, &str)> = PRIZE_TIERS
            .iter()
            .map(|p| (p.title, p.cash, p.goodies))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("1st Prize", "30k", "25k"),
                ("2nd Prize", "20k", "15k"),
                ("3rd Prize", "15k", "10k"),
            ]
        );
    }

    #[test]
    fn only_the_last_theme_links_to_explorer() {
        let linked: Vec<&str> = THEMES
            .iter()
            .filter(|t| t.links_to_explorer)
            .map(|t| t.title)
            .collect();
        assert_eq!(linked, vec!["Bill Cipher Explorer"]);
    }

    #[test]
    fn schedule_days_are_one_based() {
        assert_eq!(schedule_for(1).len(), 6);
        assert_eq!(schedule_for(2).len(), 6);
        assert_eq!(schedule_for(3).len(), 5);
        assert!(schedule_for(0).is_empty());
        assert!(schedule_for(4).is_empty());
        assert_eq!(schedule_for(3)[1].title, "Submission Deadline");
    }

    #[test]
    fn every_link_targets_a_rendered_section() {
        let links = NAV_LINKS
            .iter()
            .chain(MOBILE_NAV_LINKS.iter())
            .chain(FOOTER_SITEMAP.iter())
            .chain(FOOTER_COMMUNITY.iter());
        for (label, id) in links {
            assert!(SECTION_IDS.contains(id), "{label} -> #{id}");
        }
    }

    #[test]
    fn caesar_message_is_a_shift_of_three() {
        let decoded: String = CAESAR_MESSAGE
            .chars()
            .map(|c| match c {
                'A'..='Z' => (((c as u8 - b'A' + 23) % 26) + b'A') as char,
                other => other,
            })
            .collect();
        assert_eq!(decoded, "WELCOME TO GRAVITYHACK");
    }

    #[test]
    fn sponsor_tiers_shrink() {
        let counts: Vec<usize> = SPONSORS.iter().map(|g| g.names.len()).collect();
        assert_eq!(counts, vec![3, 4, 6]);
        assert_eq!(copyright(2024), "© 2024 HexaFalls. All secrets reserved.");
    }
}
