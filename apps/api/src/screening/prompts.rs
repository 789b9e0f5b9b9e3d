// Evaluation prompt constants.
// Templates are locale data; `Locale::prompt_template` picks one.

/// System instruction sent with every evaluation request.
pub const EVALUATION_SYSTEM: &str = "You are an HR assistant who evaluates resumes.";

/// Korean evaluation template. Replace `{quant_score}`, `{reasons}`,
/// `{applicant}` and `{raw_text}` before sending.
pub const EVALUATION_PROMPT_KO: &str = r#"당신은 채용 담당자입니다. 다음 지원자의 서류를 요약하고 평가하세요.

1. 지원자 요약 (2줄)
- 첫째 줄: "지원자 요약 (성별/대학교/경력/어학능력)"
- 둘째 줄: 성별, 대학교·전공, 경력, 영어능력을 '/' 로 구분해 한 줄로 요약

2. 합격 가능성 점수 (정량 점수 {quant_score}점 참고)

3. 한 줄 코멘트 (합격이면 이유, 불합격이면 보완 필요사항)

[정량 점수 근거]
{reasons}

[지원자 정보]
{applicant}

[이력서 일부]
{raw_text}"#;

/// English evaluation template. Same placeholders as the Korean one.
pub const EVALUATION_PROMPT_EN: &str = r#"You are a recruiter. Summarize and evaluate the following applicant's documents.

1. Applicant summary (2 lines)
- Line 1: "Applicant summary (gender/institution/experience/language ability)"
- Line 2: gender, institution and major, experience, English ability on one line separated by '/'

2. Pass likelihood score (refer to the quantitative score of {quant_score} points)

3. One-line comment (reason if passing, what to improve if not)

[Quantitative score rationale]
{reasons}

[Applicant information]
{applicant}

[Résumé excerpt]
{raw_text}"#;
