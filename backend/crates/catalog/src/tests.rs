//! Cross-layer tests for the catalog crate

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use kernel::id::{LevelId, SubjectId};

    use crate::application::{
        CreateLevelUseCase, CreateQuestionsUseCase, CreateSubjectUseCase, FullQuizUseCase,
        ListQuestionsUseCase,
    };
    use crate::domain::drafts::{LevelDraft, QuestionDraft, SubjectDraft};
    use crate::error::CatalogError;
    use crate::infra::memory::InMemoryCatalogRepository;

    fn question(text: &str) -> QuestionDraft {
        QuestionDraft {
            question_text: text.to_string(),
            option_a: "Roots".to_string(),
            option_b: "Leaves".to_string(),
            option_c: "Stem".to_string(),
            option_d: "Flower".to_string(),
            correct_index: 1,
            ..Default::default()
        }
    }

    async fn seeded() -> (Arc<InMemoryCatalogRepository>, LevelId) {
        let repo = Arc::new(InMemoryCatalogRepository::new());
        CreateSubjectUseCase::new(repo.clone())
            .execute(SubjectDraft {
                id: "science".to_string(),
                name: "Science".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let level = CreateLevelUseCase::new(repo.clone())
            .execute(LevelDraft {
                subject_id: "science".to_string(),
                level_number: 1,
                title: "Plants".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        (repo, level.id)
    }

    #[tokio::test]
    async fn test_batch_with_missing_option_stores_nothing() {
        let (repo, level_id) = seeded().await;
        let mut broken = question("Which part makes food?");
        broken.option_d = String::new();

        let err = CreateQuestionsUseCase::new(repo.clone())
            .execute(level_id.get(), vec![question("Q1"), question("Q2"), broken])
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Question 3: all 4 options are required");

        let stored = ListQuestionsUseCase::new(repo).execute(level_id).await.unwrap();
        assert!(stored.is_empty());
    }

    #[tokio::test]
    async fn test_batch_for_unknown_level_stores_nothing() {
        let (repo, level_id) = seeded().await;
        let err = CreateQuestionsUseCase::new(repo.clone())
            .execute(99, vec![question("Q1")])
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::LevelNotFound));

        let stored = ListQuestionsUseCase::new(repo).execute(level_id).await.unwrap();
        assert!(stored.is_empty());
    }

    #[tokio::test]
    async fn test_full_quiz_orders_levels_and_questions() {
        let (repo, first_level) = seeded().await;
        let second = CreateLevelUseCase::new(repo.clone())
            .execute(LevelDraft {
                subject_id: "science".to_string(),
                level_number: 2,
                title: "Animals".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let create = CreateQuestionsUseCase::new(repo.clone());
        create
            .execute(second.id.get(), vec![question("Cats?"), question("Dogs?")])
            .await
            .unwrap();
        create
            .execute(first_level.get(), vec![question("Roots?")])
            .await
            .unwrap();

        let quiz = FullQuizUseCase::new(repo)
            .execute(&SubjectId::new("science").unwrap())
            .await
            .unwrap();
        let numbers: Vec<i32> = quiz.levels.iter().map(|l| l.level.level_number).collect();
        assert_eq!(numbers, [1, 2]);
        let texts: Vec<&str> = quiz.levels[1]
            .questions
            .iter()
            .map(|q| q.question_text.as_str())
            .collect();
        assert_eq!(texts, ["Cats?", "Dogs?"]);
        assert_eq!(quiz.levels[1].questions[1].sort_order, 1);
    }

    #[tokio::test]
    async fn test_unknown_subject_quiz_is_not_found() {
        let (repo, _) = seeded().await;
        let err = FullQuizUseCase::new(repo)
            .execute(&SubjectId::new("history").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::SubjectNotFound));
    }

    #[tokio::test]
    async fn test_duplicate_subject_and_level() {
        let (repo, _) = seeded().await;

        let err = CreateSubjectUseCase::new(repo.clone())
            .execute(SubjectDraft {
                id: "science".to_string(),
                name: "Science again".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSubject));

        let err = CreateLevelUseCase::new(repo.clone())
            .execute(LevelDraft {
                subject_id: "science".to_string(),
                level_number: 1,
                title: "Plants again".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateLevel));

        let err = CreateLevelUseCase::new(repo)
            .execute(LevelDraft {
                subject_id: "art".to_string(),
                level_number: 1,
                title: "Colours".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::SubjectNotFound));
    }
}

#[cfg(test)]
mod http_tests {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::domain::entities::Course;
    use crate::infra::memory::InMemoryCatalogRepository;
    use crate::presentation::router::{
        catalog_admin_router_generic, catalog_public_router_generic,
    };

    fn course(id: i64, title: &str, category: &str) -> Course {
        Course {
            id: kernel::id::CourseId::from_raw(id),
            title: title.to_string(),
            category: category.to_string(),
            description: String::new(),
            image_url: format!("http://img/{id}.png"),
            instructor: "Ms. Silva".to_string(),
        }
    }

    fn app() -> Router {
        let repo = InMemoryCatalogRepository::with_courses(vec![
            course(1, "Counting", "Maths"),
            course(2, "Shapes", "Maths"),
            course(3, "Planets", "Science"),
        ]);
        catalog_public_router_generic(repo.clone())
            .nest("/admin", catalog_admin_router_generic(repo))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_courses_filter_by_category() {
        let app = app();

        let (status, body) = send(&app, "GET", "/courses", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Courses retrieved successfully");
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
        assert_eq!(body["data"][0]["imageUrl"], "http://img/1.png");

        let (_, body) = send(&app, "GET", "/courses?category=Maths", None).await;
        let titles: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, ["Counting", "Shapes"]);
    }

    #[tokio::test]
    async fn test_quiz_authoring_flow() {
        let app = app();

        let (status, body) = send(
            &app,
            "POST",
            "/admin/subjects",
            Some(json!({"id": "science", "name": "Science"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["emoji"], "📚");

        let (status, _) = send(
            &app,
            "POST",
            "/admin/subjects",
            Some(json!({"id": "science", "name": "Science"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, body) = send(
            &app,
            "POST",
            "/admin/levels",
            Some(json!({"subject_id": "science", "level_number": 1, "title": "Plants"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Level created");
        let level_id = body["data"]["id"].as_i64().unwrap();

        let (status, body) = send(
            &app,
            "POST",
            "/admin/questions",
            Some(json!({
                "level_id": level_id,
                "questions": [
                    {"question_text": "Green part?", "option_a": "Leaf", "option_b": "Root",
                     "option_c": "Seed", "option_d": "Bark", "correct_index": 0},
                    {"question_text": "Drinks water?", "option_a": "Leaf", "option_b": "Root",
                     "option_c": "Seed", "option_d": "Bark", "correct_index": 1}
                ]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "2 questions saved successfully");
        assert_eq!(body["data"], json!({"level_id": level_id, "count": 2}));

        let (status, body) = send(&app, "GET", "/admin/quiz?subject_id=science", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Quiz retrieved");
        assert_eq!(body["data"]["name"], "Science");
        assert_eq!(body["data"]["levels"][0]["questions"][1]["question_text"], "Drinks water?");
    }

    #[tokio::test]
    async fn test_query_validation() {
        let app = app();

        let (status, body) = send(&app, "GET", "/admin/questions", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "level_id is required"}));

        let (status, body) = send(&app, "GET", "/admin/quiz", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "subject_id is required");

        let (status, body) = send(&app, "GET", "/admin/quiz?subject_id=history", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Subject not found");
    }

    #[tokio::test]
    async fn test_puzzle_lifecycle() {
        let app = app();

        for (title, category) in [("Lion", "Animals"), ("Rocket", "Space"), ("Tiger", "Animals")] {
            let (status, body) = send(
                &app,
                "POST",
                "/admin/puzzles",
                Some(json!({"title": title, "image_url": "http://h/uploads/x.png", "category": category})),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
            assert_eq!(body["data"]["piece_count"], 16);
            assert_eq!(body["data"]["difficulty"], "Medium");
        }

        let (_, body) = send(&app, "GET", "/puzzles?category=Animals", None).await;
        let titles: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, ["Tiger", "Lion"]);

        let (status, body) = send(&app, "DELETE", "/admin/puzzles?id=2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Puzzle deleted"}));

        let (status, _) = send(&app, "DELETE", "/admin/puzzles?id=2", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&app, "DELETE", "/admin/puzzles", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "id is required");

        let (status, body) = send(
            &app,
            "POST",
            "/admin/puzzles",
            Some(json!({"title": "No image"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "title and image_url are required");
    }
}
