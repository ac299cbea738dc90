use super::domain::{Criterion, UniversityType};

/// Narrative per rating, index 0 holding the text for a 1.
pub type Levels = [&'static str; 6];

struct CoreNarratives {
    academic_excellence: Levels,
    impact_leadership: Levels,
    unique_narrative: Levels,
}

struct TraditionalNarratives {
    academics: Levels,
    extracurriculars: Levels,
    athletics: Levels,
    personal_qualities: Levels,
    recommendations: Levels,
    interview: Levels,
}

/// Read-only narrative text shown next to each rating in reports.
pub struct AdmissionCriteriaCatalog {
    ivy_league: CoreNarratives,
    top30: CoreNarratives,
    uc_system: CoreNarratives,
    traditional: TraditionalNarratives,
}

impl AdmissionCriteriaCatalog {
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Narrative for a rating. `None` for ratings outside 1-6 and for the UC interview, which
    /// the UC system does not consider.
    pub fn describe(
        &self,
        university_type: UniversityType,
        criterion: Criterion,
        score: u8,
    ) -> Option<&'static str> {
        let index = usize::from(score).checked_sub(1).filter(|index| *index < 6)?;
        self.levels(university_type, criterion)
            .map(|levels| levels[index])
    }

    pub fn levels(
        &self,
        university_type: UniversityType,
        criterion: Criterion,
    ) -> Option<&Levels> {
        let core = match university_type {
            UniversityType::IvyLeague => &self.ivy_league,
            UniversityType::Top30 => &self.top30,
            UniversityType::UcSystem => &self.uc_system,
        };

        let levels = match criterion {
            Criterion::AcademicExcellence => &core.academic_excellence,
            Criterion::ImpactLeadership => &core.impact_leadership,
            Criterion::UniqueNarrative => &core.unique_narrative,
            Criterion::Academics => &self.traditional.academics,
            Criterion::Extracurriculars => &self.traditional.extracurriculars,
            Criterion::Athletics => &self.traditional.athletics,
            Criterion::PersonalQualities => &self.traditional.personal_qualities,
            Criterion::Recommendations => &self.traditional.recommendations,
            Criterion::Interview if university_type == UniversityType::UcSystem => return None,
            Criterion::Interview => &self.traditional.interview,
        };
        Some(levels)
    }
}

static STANDARD: AdmissionCriteriaCatalog = AdmissionCriteriaCatalog {
    ivy_league: CoreNarratives {
        academic_excellence: [
            "Top of the class in the most demanding curriculum offered, with national or international academic distinction.",
            "Near the top of the class with a full AP/IB load and state or national recognition.",
            "Strong grades in a rigorous program; competitive but not yet distinctive in an Ivy League pool.",
            "Solid grades with moderate rigor; below the typical admitted Ivy League profile.",
            "Uneven grades or limited rigor; academics would be a concern for Ivy League readers.",
            "Academic record well below the Ivy League admitted range.",
        ],
        impact_leadership: [
            "Founded or led an initiative with measurable regional or national impact.",
            "Top leadership role with clear, documented results beyond the school.",
            "Meaningful leadership within the school community with visible outcomes.",
            "Officer or organizer roles with modest, mostly internal impact.",
            "Participation with little leadership or initiative shown.",
            "No evidence of leadership or impact.",
        ],
        unique_narrative: [
            "A rare, coherent story that would stand out in any Ivy League reading room.",
            "A distinctive theme connecting interests, activities, and essays.",
            "A clear personal theme, though similar profiles are common in this pool.",
            "Some individuality, but the application reads as a familiar type.",
            "Scattered interests with no unifying story.",
            "No discernible narrative.",
        ],
    },
    top30: CoreNarratives {
        academic_excellence: [
            "Top of the class with the most rigorous curriculum available; exceeds the Top 20-30 admitted profile.",
            "Top 5% with a heavy AP/IB load; squarely within the Top 20-30 admitted range.",
            "Strong grades in honors and AP courses; competitive for Top 20-30 schools.",
            "Good grades with some rigor; at the lower edge of the Top 20-30 range.",
            "Mixed grades or light rigor; academics would need offsetting strengths.",
            "Academic record below the Top 20-30 admitted range.",
        ],
        impact_leadership: [
            "Leadership with impact well beyond the school, recognized at state or national level.",
            "Leads a major organization or project with documented community results.",
            "Holds a leadership role with clear contributions to the school community.",
            "Minor leadership or a supporting role in a larger effort.",
            "Membership without leadership responsibilities.",
            "No evidence of leadership or impact.",
        ],
        unique_narrative: [
            "An unusual and compelling story that clearly differentiates the applicant.",
            "A strong, consistent theme that readers will remember.",
            "A recognizable theme with some memorable elements.",
            "A conventional profile with occasional distinctive details.",
            "Activities and essays do not add up to a story.",
            "No discernible narrative.",
        ],
    },
    uc_system: CoreNarratives {
        academic_excellence: [
            "Weighted UC GPA at the top of the applicant pool with the most demanding A-G course load.",
            "High weighted UC GPA with many honors-designated and AP/IB courses.",
            "Strong UC GPA; competitive for the more selective UC campuses.",
            "Solid UC GPA; competitive for most UC campuses.",
            "UC GPA near the minimum eligibility range.",
            "UC GPA below eligibility or A-G requirements incomplete.",
        ],
        impact_leadership: [
            "Sustained leadership with documented impact, well suited to the Personal Insight Questions.",
            "Significant leadership with clear examples of initiative and results.",
            "Leadership roles that show responsibility and growth.",
            "Some leadership or service with limited scope.",
            "Participation without leadership.",
            "No evidence of leadership or impact.",
        ],
        unique_narrative: [
            "Exceptional personal context and achievement in context that UC readers value highly.",
            "A strong personal story that comes through clearly in the Personal Insight Questions.",
            "A clear personal theme supported by activities.",
            "Some personal context, but not well developed.",
            "Little personal context conveyed.",
            "No discernible narrative.",
        ],
    },
    traditional: TraditionalNarratives {
        academics: [
            "Summa cum laude potential; near-perfect grades and test scores with exceptional creativity.",
            "Magna cum laude potential; excellent grades and test scores.",
            "Cum laude potential; very good grades and test scores.",
            "Good grades and test scores; generally solid student.",
            "Fair grades and test scores; some academic weaknesses.",
            "Weak academic record.",
        ],
        extracurriculars: [
            "National-level achievement or recognition in an activity.",
            "Regional or state-level achievement; major leadership in an activity.",
            "Substantial involvement with leadership in one or more activities.",
            "Moderate involvement with some leadership.",
            "Light involvement.",
            "Little or no involvement.",
        ],
        athletics: [
            "Recruited athlete; likely to compete at the varsity level in college.",
            "Strong varsity athlete with regional or state recognition.",
            "Varsity athlete with team leadership, such as captain.",
            "Moderate participation in school athletics.",
            "Light participation.",
            "No athletic participation.",
        ],
        personal_qualities: [
            "Outstanding character and maturity; truly exceptional.",
            "Very strong character, maturity, and integrity.",
            "Strong personal qualities that come through consistently.",
            "Generally positive personal qualities.",
            "Some concerns about character or maturity.",
            "Serious concerns about character or maturity.",
        ],
        recommendations: [
            "Recommenders call the student one of the best in their career.",
            "Enthusiastic support describing the student as among the best in years.",
            "Very positive support with specific examples.",
            "Positive but generic support.",
            "Lukewarm or neutral support.",
            "Negative or concerning recommendations.",
        ],
        interview: [
            "Exceptional interview; the interviewer strongly advocates for admission.",
            "Very strong interview with a memorable impression.",
            "Positive interview that reinforces the application.",
            "Acceptable interview without a strong impression.",
            "Weak interview that raises some concerns.",
            "Poor interview with serious concerns.",
        ],
    },
};
