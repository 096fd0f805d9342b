//! Curated editorial content merged into the timeline.
//!
//! Everything here is hand-authored text drawn from the Cortés research
//! corpus. The builders take no input and always return the same values.

use timeline_enrich_shared::{Award, Biography, DecadeSummary, TimelineHighlight, WorkEnhancement};

/// Biography with personal background, career highlights and awards.
pub fn biography() -> Biography {
    Biography {
        name: "Dr. Carlos E. Cortés",
        title: "Edward A. Dickson Emeritus Professor of History",
        institution: "University of California, Riverside",
        birth_year: 1934,
        career_start: 1968,
        total_works: "400+",
        bio: "Dr. Carlos E. Cortés is a pioneering figure in multicultural education, ethnic studies, and diversity scholarship with a career spanning over five decades. Born in 1934 in Kansas City, Missouri, he grew up navigating the intersection of cultures as the son of Carlos Cortés, a Mexican Catholic immigrant from Guadalajara, and Florence Hoffman, the Jewish American daughter of Ukrainian and Austrian immigrants. This unique upbringing in a racially segregated, religiously divided community profoundly shaped his life's work on diversity and inclusion.",
        personal_background: "In 1933, Carlos Cortés's father, a Mexican Catholic immigrant from Guadalajara, married Florence Hoffman, a Jewish American woman—an intermarriage before its time. Growing up in post-WWII Kansas City, young Carlos learned to navigate multiple identities. A defining moment came in 1949 when, as a sophomore, he was pressured by a Spanish teacher to go by 'Carl' instead of Carlos. His father stormed to the principal's office declaring: 'My son's name is Carlos. His father's name is Carlos. His grandfather's name was Carlos. His great-grandfather's name was Carlos. And I'll be damned if you're going to call him anything but Carlos.' This became a touchstone for authentic inclusivity throughout his career. He later wrote about these experiences in his memoir 'Rose Hill: An Intermarriage before Its Time' (2012) and adapted it into a one-person play performed nationwide.",
        timeline_highlights: vec![
            highlight(1934, "Born in Kansas City, Missouri to a Mexican Catholic father and Jewish American mother"),
            highlight(1962, "Began graduate study in history and literature at University of New Mexico"),
            highlight(1968, "Joined UC Riverside faculty in January; began 57-year career in academia"),
            highlight(1970, "Taught UCR's first Chicano History class; drafted first diversity graduation requirement"),
            highlight(1971, "Served on California's first statewide textbook evaluation task force for ethnic content"),
            highlight(1973, "Contributed 'Chicanos' chapter to James Banks' 'Teaching Ethnic Studies,' launching national speaking career"),
            highlight(1974, "Published 'Gaúcho Politics in Brazil,' winning the Hubert Herring Memorial Award"),
            highlight(2000, "Published 'The Children Are Watching'; joined Dora the Explorer as Creative/Cultural Advisor"),
            highlight(2009, "Received NAACP Image Award for work with Nickelodeon"),
            highlight(2016, "City of Riverside establishes Carlos E. Cortés Diversity and Inclusion Award"),
            highlight(2020, "First UCR faculty to receive Constantine Panunzio Distinguished Emeriti Award"),
            highlight(2021, "Eight principles he authored adapted into California's Ethnic Studies Model Curriculum"),
            highlight(2022, "Became Consulting Humanist for The Cheech Marin Museum of Chicano Art & Culture"),
            highlight(2024, "Celebrated 90th birthday; began donating professional papers to UCR Special Collections"),
        ],
        awards: vec![
            Award {
                year: 1974,
                award: "Hubert Herring Memorial Award",
                description: "Pacific Coast Council on Latin American Studies for Gaúcho Politics in Brazil",
            },
            Award {
                year: 2009,
                award: "NAACP Image Award",
                description: "Creative/Cultural Advisory work for Nickelodeon",
            },
            Award {
                year: 2017,
                award: "Honorable Mention - International Latino Book Awards",
                description: "Best Book of Poetry for Fourth Quarter: Reflections of a Cranky Old Man",
            },
            Award {
                year: 2020,
                award: "Constantine Panunzio Distinguished Emeriti Award",
                description: "University of California (first faculty member from UCR to receive this honor)",
            },
        ],
    }
}

fn highlight(year: u16, event: &'static str) -> TimelineHighlight {
    TimelineHighlight { year, event }
}

/// Per-decade summaries, in chronological order.
pub fn decade_summaries() -> Vec<DecadeSummary> {
    vec![
        DecadeSummary {
            decade: "1970s",
            summary: "The 1970s marked Dr. Cortés's emergence as a pioneer in Chicano studies and multicultural education. In January 1970, he taught UCR's first Chicano History class and drafted the university's first diversity graduation requirement—a precursor to requirements now at one-third of U.S. colleges. His 1971 service on California's first statewide textbook evaluation task force for ethnic content launched his national speaking career. His chapter 'Chicanos' in James Banks' influential 1973 book 'Teaching Ethnic Studies' was widely adopted for teacher training, establishing him as a founding voice in K-12 multicultural education. As he later reflected: 'We championed bridge-building inclusion without dividing the world into the oppressed and their oppressors. We committed ourselves to critical, uninhibited dialogue. When we sang \"We Shall Overcome,\" we meant it.'",
            key_achievements: vec![
                "Taught UCR's first Chicano History class (1970)",
                "Drafted UCR's first diversity graduation requirement",
                "Served on California's first ethnic content textbook task force (1971)",
                "Published 'Chicanos' chapter in James Banks' seminal multicultural education text",
                "Won Hubert Herring Memorial Award for 'Gaúcho Politics in Brazil' (1974)",
            ],
        },
        DecadeSummary {
            decade: "1980s",
            summary: "The 1980s saw Dr. Cortés become a nationally recognized leader in multicultural education and bilingual education scholarship. His work on language minority students and Hispanic experiences in the United States helped shape educational policy. He conducted diversity training across 48 states (missing only Delaware and West Virginia), working with 'both liberals and conservatives, Republicans and Democrats, often in states that today ban wokeness.' This decade established his reputation as a bridge-builder who could engage audiences across the political spectrum.",
            key_achievements: vec![
                "Published 'Beyond Language: Social and Cultural Factors in Schooling Language Minority Students'",
                "Edited 'Hispanics in the United States' book series",
                "Established national reputation as diversity trainer across 48 states",
                "Built bridges across political divides on diversity issues",
            ],
        },
        DecadeSummary {
            decade: "1990s",
            summary: "During the 1990s, Dr. Cortés expanded his focus to media literacy and how mass media teach about diversity. His educational videos on classroom diversity became widely used in teacher training programs nationwide. This period laid the groundwork for his groundbreaking work on media representation that would culminate in his 2000 book 'The Children Are Watching.'",
            key_achievements: vec![
                "Produced 'Video Journal of Education: Diversity in the Classroom'",
                "Expanded research on media and diversity education",
                "Continued national speaking and consulting on multicultural education",
            ],
        },
        DecadeSummary {
            decade: "2000s",
            summary: "The 2000s brought Dr. Cortés's most visible cultural impact. His 2000 book 'The Children Are Watching: How the Media Teach about Diversity' became influential in the field. That same year, he joined Nickelodeon's 'Dora the Explorer' as Creative/Cultural Advisor, a role he held for over 20 years. He championed making Dora 'pan-Latino'—a proud Latina with no specific national origin, allowing Latino children of all backgrounds to identify with her. As he explained: 'Dora constantly draws on her bilingual skills to build intercultural bridges.' His work earned an NAACP Image Award in 2009.",
            key_achievements: vec![
                "Published 'The Children Are Watching: How the Media Teach about Diversity'",
                "Became Creative/Cultural Advisor for 'Dora the Explorer' (2000-2020s)",
                "Authored 'The Making—and Remaking—of a Multiculturalist' autobiography",
                "Drafted 'Building a More Inclusive Riverside Community' statement",
                "Received NAACP Image Award (2009)",
            ],
        },
        DecadeSummary {
            decade: "2010s",
            summary: "The 2010s showcased Dr. Cortés's range as both scholar and creative writer. His 2012 memoir 'Rose Hill: An Intermarriage before Its Time' explored growing up at the intersection of Mexican Catholic and Jewish American identities. His poetry collection 'Fourth Quarter' won honors at the International Latino Book Awards. He continued scholarly work with the 'Multicultural America Encyclopedia' and research on free speech and diversity through a UC fellowship. The City of Riverside honored his legacy by establishing the Carlos E. Cortés Diversity and Inclusion Award in 2016.",
            key_achievements: vec![
                "Published memoir 'Rose Hill: An Intermarriage before Its Time' (2012)",
                "Edited 'Multicultural America: A Multimedia Encyclopedia'",
                "Received International Latino Book Awards honorable mention for poetry",
                "City of Riverside establishes award in his name (2016)",
                "UC National Center fellowship on free speech and civic engagement (2019)",
            ],
        },
        DecadeSummary {
            decade: "2020s",
            summary: "Now in his 90s, Dr. Cortés remains remarkably active. He authored eight principles that were adapted into California's groundbreaking Ethnic Studies Model Curriculum (2021). He became Consulting Humanist for The Cheech Marin Museum of Chicano Art & Culture, conducting filmed conversations exploring Chicano art and culture. In 2020, he became the first UCR faculty member to receive the Constantine Panunzio Distinguished Emeriti Award. His 'Renewing Diversity' blog series advocates for returning to the bridge-building, optimistic spirit of 1970s multicultural education. At 90, he continues to write, speak, and challenge the field: 'We can still overcome.'",
            key_achievements: vec![
                "Authored 8 principles adapted into California's Ethnic Studies Model Curriculum",
                "First UCR faculty to receive Constantine Panunzio Distinguished Emeriti Award",
                "Became Consulting Humanist for The Cheech museum (2022)",
                "Cultural consultant on 'Puss in Boots: The Last Wish' (2022)",
                "Began donating professional papers to UCR Special Collections (2024)",
                "Active blogger with 'Renewing Diversity' series",
            ],
        },
    ]
}

/// Work enhancements in match priority order: the first key found in a
/// lowercased title wins.
pub fn work_enhancements() -> Vec<WorkEnhancement> {
    vec![
        WorkEnhancement {
            match_key: "chicano history",
            enhanced_description: "Dr. Cortés's pioneering Chicano History course at UCR, launched in January 1970, was among the first of its kind at a major university. The course featured innovative pedagogical approaches, including a family history research paper that evolved to be more inclusive after a non-Chicano student's request. As Cortés later reflected: 'If you want to be inclusive, you can't exclude.' This course helped establish Chicano Studies as a legitimate academic field.",
            related_themes: vec!["ethnic studies", "curriculum innovation", "inclusive pedagogy"],
        },
        WorkEnhancement {
            match_key: "gaucho politics",
            enhanced_description: "Based on his doctoral dissertation, this scholarly monograph examined regional Brazilian politics from 1930-1964. It won the Hubert Herring Memorial Award from the Pacific Coast Council on Latin American Studies, establishing Cortés's reputation as a serious Latin American historian before his transition to multicultural education scholarship.",
            related_themes: vec!["Latin American history", "Brazilian politics", "doctoral research"],
        },
        WorkEnhancement {
            match_key: "children are watching",
            enhanced_description: "Published in 2000, this influential book analyzes how mass media—television, film, news, advertising—teach viewers about diversity, often without viewers realizing they are being educated. The book's publication coincided with Cortés joining Nickelodeon's 'Dora the Explorer' as Creative/Cultural Advisor, allowing him to put his media literacy theories into practice on one of children's television's most successful shows.",
            related_themes: vec!["media literacy", "diversity in media", "informal education"],
        },
        WorkEnhancement {
            match_key: "dora the explorer",
            enhanced_description: "For over two decades, Dr. Cortés served as Creative/Cultural Advisor for Nickelodeon's groundbreaking show. He advocated for making Dora 'pan-Latino'—a proud Latina without a specific national origin—so children of all Latino backgrounds could identify with her. As he explained: 'Dora constantly draws on her bilingual skills to build intercultural bridges.' His work earned an NAACP Image Award in 2009. The show demonstrated how children's media can model inclusive, additive diversity.",
            related_themes: vec![
                "children's media",
                "Latino representation",
                "bilingual education",
                "cultural consulting",
            ],
        },
        WorkEnhancement {
            match_key: "rose hill",
            enhanced_description: "This memoir explores Cortés's unique upbringing as the son of a Mexican Catholic immigrant father from Guadalajara and a Jewish American mother of Ukrainian and Austrian heritage. Set in racially segregated post-WWII Kansas City, it chronicles how navigating multiple identities shaped his life's work on diversity. The book includes the now-famous 'Carl moment' when his father defended his right to his Mexican name. Cortés later adapted the memoir into a one-person play performed across the United States.",
            related_themes: vec![
                "memoir",
                "intermarriage",
                "identity",
                "Kansas City",
                "Jewish-Mexican heritage",
            ],
        },
        WorkEnhancement {
            match_key: "ethnic studies",
            enhanced_description: "Dr. Cortés authored eight basic curriculum principles for high school Ethnic Studies that were adapted into outcomes on pages 16-20 of California's final Model Curriculum, adopted in March 2021. This work contributed to AB 101, making California the first state to require ethnic studies for high school graduation. His principles drew on five decades of multicultural education experience and his 1970s work on the state's first textbook evaluation task force.",
            related_themes: vec![
                "curriculum development",
                "California education policy",
                "high school requirements",
            ],
        },
        WorkEnhancement {
            match_key: "anti-racism vision",
            enhanced_description: "In 2020, Dr. Cortés authored a two-page anti-racism vision statement for the City of Riverside, which was adopted 6-1 by the City Council on October 20, 2020. This built on his earlier work drafting 'Building a More Inclusive Riverside Community' (2001) for Mayor Ronald Loveridge's Multicultural Forum, which established inclusivity as a basic city principle.",
            related_themes: vec!["civic engagement", "anti-racism", "local government", "Riverside"],
        },
        WorkEnhancement {
            match_key: "cheech",
            enhanced_description: "As Consulting Humanist for The Cheech Marin Museum of Chicano Art & Culture (opened June 2022 in Riverside), Dr. Cortés conducts filmed 'Conversations at The Cheech' exploring Chicano art and culture. His vision aligns with founder Cheech Marin's: making Chicano art everybody's art through 'mutual respect, mutual enrichment, and mutual identification'—a capacious we-ness that expands rather than excludes.",
            related_themes: vec![
                "Chicano art",
                "museum consulting",
                "cultural institutions",
                "Riverside",
            ],
        },
        WorkEnhancement {
            match_key: "renewing multicultural",
            enhanced_description: "Based on his 2024 NAME conference keynote in Anaheim, this article advocates for returning to the founding principles of 1970s multicultural education: bridge-building inclusion, uninhibited dialogue, and optimistic vision. Cortés identifies 'three bad habits' in contemporary diversity work and calls for course correction: 'We can still overcome.'",
            related_themes: vec![
                "multicultural education renewal",
                "diversity critique",
                "bridge-building",
            ],
        },
    ]
}
