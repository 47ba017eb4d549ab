//! Orchestrator tests over in-process schema readers and in-memory SQLite.

use std::{
    fs,
    path::Path,
    sync::atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use tempfile::TempDir;
use wink_codegen::{ControllerStyle, GenerateOptions, Generator};
use wink_core::{Column, WriteResult};
use wink_schema::{
    Driver, SchemaError, SchemaReader, SqliteSchemaReader, normalize_mysql_type,
};

type Table = (&'static str, Vec<(&'static str, &'static str)>);

/// Reader serving fixed tables with MySQL type normalization.
struct FixedReader {
    tables: Vec<Table>,
    table_reads: AtomicUsize,
    column_reads: AtomicUsize,
    /// Table whose column listing fails
    broken: Option<&'static str>,
}

impl FixedReader {
    fn new(tables: Vec<Table>) -> Self {
        Self {
            tables,
            table_reads: AtomicUsize::new(0),
            column_reads: AtomicUsize::new(0),
            broken: None,
        }
    }
}

#[async_trait]
impl SchemaReader for FixedReader {
    fn driver(&self) -> Driver {
        Driver::MySql
    }

    async fn list_tables(&self) -> wink_schema::Result<Vec<String>> {
        self.table_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.tables.iter().map(|(name, _)| name.to_string()).collect())
    }

    async fn list_columns(&self, table: &str) -> wink_schema::Result<Vec<Column>> {
        self.column_reads.fetch_add(1, Ordering::SeqCst);
        if self.broken == Some(table) {
            return Err(SchemaError::NoDatabaseSelected);
        }

        Ok(self
            .tables
            .iter()
            .find(|(name, _)| *name == table)
            .map(|(_, columns)| {
                columns
                    .iter()
                    .map(|(name, raw)| Column::new(*name, normalize_mysql_type(raw)))
                    .collect()
            })
            .unwrap_or_default())
    }
}

fn posts() -> Table {
    (
        "posts",
        vec![
            ("id", "int(11)"),
            ("title", "varchar(255)"),
            ("is_published", "tinyint(1)"),
            ("created_at", "timestamp"),
            ("updated_at", "timestamp"),
        ],
    )
}

fn comments() -> Table {
    (
        "comments",
        vec![("id", "bigint(20) unsigned"), ("post_id", "bigint"), ("body", "text")],
    )
}

fn migrations() -> Table {
    ("migrations", vec![("id", "int"), ("migration", "varchar(255)")])
}

fn resource_options() -> GenerateOptions {
    GenerateOptions {
        factories: true,
        policies: true,
        controllers: Some(ControllerStyle::Resource),
        excluded_tables: vec!["migrations".to_string()],
        ..GenerateOptions::new("mysql")
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
}

#[tokio::test]
async fn test_posts_round_trip() {
    let temp = TempDir::new().unwrap();
    let reader = FixedReader::new(vec![posts()]);

    let result = Generator::new(&reader, resource_options())
        .generate(temp.path())
        .await
        .unwrap();

    assert_eq!(result.tables, vec!["posts"]);

    let model = read(&temp.path().join("app/Models/Generated/Post.php"));
    assert!(model.contains("    protected $fillable = ['title', 'is_published'];\n"));
    assert!(model.contains(
        "    protected $casts = [\n        'is_published' => 'boolean',\n        'created_at' => 'timestamp',\n        'updated_at' => 'timestamp',\n    ];\n"
    ));
    assert!(model.contains("    protected $connection = 'mysql';\n"));

    let routes = read(&temp.path().join("app/Models/Generated/GeneratedRoutes.php"));
    let lines: Vec<&str> = routes
        .lines()
        .filter(|line| line.starts_with("Route::resource"))
        .collect();
    assert_eq!(
        lines,
        vec!["Route::resource('posts', \\App\\Http\\Controllers\\Generated\\PostController::class);"]
    );
}

#[tokio::test]
async fn test_writes_every_requested_artifact() {
    let temp = TempDir::new().unwrap();
    let reader = FixedReader::new(vec![posts(), migrations(), comments()]);

    let result = Generator::new(&reader, resource_options())
        .generate(temp.path())
        .await
        .unwrap();

    let written: Vec<String> = result
        .files
        .iter()
        .map(|f| format!("{} {}", f.label, f.name))
        .collect();
    assert_eq!(
        written,
        vec![
            "Model Post",
            "Factory PostFactory",
            "Policy PostPolicy",
            "Controller PostController",
            "Model Comment",
            "Factory CommentFactory",
            "Policy CommentPolicy",
            "Controller CommentController",
            "Routes GeneratedRoutes",
        ]
    );
    assert!(result.files.iter().all(|f| f.result == WriteResult::Written));

    for path in [
        "app/Models/Generated/Comment.php",
        "database/factories/Generated/CommentFactory.php",
        "app/Policies/Generated/CommentPolicy.php",
        "app/Http/Controllers/Generated/CommentController.php",
    ] {
        assert!(temp.path().join(path).exists(), "{path} missing");
    }
    assert!(!temp.path().join("app/Models/Generated/Migration.php").exists());

    let routes = read(&temp.path().join("app/Models/Generated/GeneratedRoutes.php"));
    assert_eq!(
        routes,
        "<?php\n\nuse Illuminate\\Support\\Facades\\Route;\n\n\
         Route::resource('posts', \\App\\Http\\Controllers\\Generated\\PostController::class);\n\
         Route::resource('comments', \\App\\Http\\Controllers\\Generated\\CommentController::class);\n"
    );
}

#[tokio::test]
async fn test_models_only_by_default() {
    let temp = TempDir::new().unwrap();
    let reader = FixedReader::new(vec![posts()]);

    let result = Generator::new(&reader, GenerateOptions::new("app"))
        .generate(temp.path())
        .await
        .unwrap();

    assert_eq!(result.files.len(), 1);
    assert!(!temp.path().join("database").exists());
    assert!(!temp.path().join("app/Models/Generated/GeneratedRoutes.php").exists());
}

#[tokio::test]
async fn test_bare_controllers_register_no_routes() {
    let temp = TempDir::new().unwrap();
    let reader = FixedReader::new(vec![posts()]);
    let options = GenerateOptions {
        controllers: Some(ControllerStyle::Bare),
        ..GenerateOptions::new("app")
    };

    Generator::new(&reader, options)
        .generate(temp.path())
        .await
        .unwrap();

    let controller = read(&temp.path().join("app/Http/Controllers/Generated/PostController.php"));
    assert!(controller.contains("// Add your controller methods here"));
    assert!(!temp.path().join("app/Models/Generated/GeneratedRoutes.php").exists());
}

#[tokio::test]
async fn test_factory_reads_columns_again() {
    let reader = FixedReader::new(vec![posts(), comments()]);
    let options = GenerateOptions {
        factories: true,
        ..GenerateOptions::new("app")
    };

    Generator::new(&reader, options)
        .preview(Path::new("."))
        .await
        .unwrap();

    assert_eq!(reader.column_reads.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_preview_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let reader = FixedReader::new(vec![posts()]);

    let preview = Generator::new(&reader, resource_options())
        .preview(temp.path())
        .await
        .unwrap();
    let files = &preview.files;

    assert_eq!(preview.tables, vec!["posts"]);
    assert_eq!(reader.table_reads.load(Ordering::SeqCst), 1);
    assert_eq!(files.len(), 5);
    assert_eq!(files[0].path, temp.path().join("app/Models/Generated/Post.php"));
    assert!(files[0].content.starts_with("<?php\n\nnamespace App\\Models\\Generated;\n"));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_regeneration_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let reader = FixedReader::new(vec![posts(), comments()]);
    let generator = Generator::new(&reader, resource_options());

    let first = generator.generate(temp.path()).await.unwrap();
    let contents: Vec<String> = first.files.iter().map(|f| read(&f.path)).collect();

    let second = generator.generate(temp.path()).await.unwrap();
    let again: Vec<String> = second.files.iter().map(|f| read(&f.path)).collect();

    assert_eq!(contents, again);
}

#[tokio::test]
async fn test_failure_stops_run_and_keeps_earlier_files() {
    let temp = TempDir::new().unwrap();
    let mut reader = FixedReader::new(vec![posts(), comments()]);
    reader.broken = Some("comments");

    let err = Generator::new(&reader, GenerateOptions::new("app"))
        .generate(temp.path())
        .await
        .unwrap_err();

    assert!(format!("{err:#}").contains("failed to read columns of 'comments'"));
    assert!(temp.path().join("app/Models/Generated/Post.php").exists());
    assert!(!temp.path().join("app/Models/Generated/Comment.php").exists());
}

#[tokio::test]
async fn test_write_failure_stops_run_and_keeps_earlier_files() {
    let temp = TempDir::new().unwrap();
    // A directory occupying the controller's file path makes the write fail
    let blocked = temp
        .path()
        .join("app/Http/Controllers/Generated/CommentController.php");
    fs::create_dir_all(&blocked).unwrap();

    let reader = FixedReader::new(vec![posts(), comments(), migrations()]);
    let options = GenerateOptions {
        controllers: Some(ControllerStyle::Bare),
        ..GenerateOptions::new("app")
    };

    let err = Generator::new(&reader, options)
        .generate(temp.path())
        .await
        .unwrap_err();

    assert!(format!("{err:#}").contains("failed to write"));
    assert!(temp.path().join("app/Models/Generated/Post.php").exists());
    assert!(
        temp.path()
            .join("app/Http/Controllers/Generated/PostController.php")
            .is_file()
    );
    assert!(temp.path().join("app/Models/Generated/Comment.php").exists());
    assert!(!temp.path().join("app/Models/Generated/Migration.php").exists());
}

#[tokio::test]
async fn test_blocked_output_root_fails_before_later_artifacts() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("app/Policies")).unwrap();
    fs::write(temp.path().join("app/Policies/Generated"), "not a directory").unwrap();

    let reader = FixedReader::new(vec![posts(), comments()]);
    let options = GenerateOptions {
        policies: true,
        ..GenerateOptions::new("app")
    };

    let err = Generator::new(&reader, options)
        .generate(temp.path())
        .await
        .unwrap_err();

    assert!(format!("{err:#}").contains("failed to create directory"));
    assert!(temp.path().join("app/Models/Generated/Post.php").exists());
    assert!(!temp.path().join("app/Models/Generated/Comment.php").exists());
}

#[tokio::test]
async fn test_tables_applies_exclusions() {
    let reader = FixedReader::new(vec![migrations(), posts(), comments()]);

    let tables = Generator::new(&reader, resource_options())
        .tables()
        .await
        .unwrap();

    assert_eq!(tables, vec!["posts", "comments"]);
}

#[tokio::test]
async fn test_sqlite_database() {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    for sql in [
        "CREATE TABLE test_users (id INTEGER PRIMARY KEY AUTOINCREMENT, name VARCHAR(255), \
         email VARCHAR(255), created_at TIMESTAMP, updated_at TIMESTAMP)",
        "CREATE TABLE test_posts (id INTEGER PRIMARY KEY AUTOINCREMENT, user_id INTEGER, \
         title VARCHAR(255), content TEXT, is_published BOOLEAN, published_at DATETIME, \
         created_at TIMESTAMP, updated_at TIMESTAMP)",
    ] {
        sqlx::query(sql).execute(&pool).await.unwrap();
    }

    let temp = TempDir::new().unwrap();
    let reader = SqliteSchemaReader::new(pool);
    let result = Generator::new(&reader, resource_options())
        .generate(temp.path())
        .await
        .unwrap();

    let mut tables = result.tables.clone();
    tables.sort();
    assert_eq!(tables, vec!["test_posts", "test_users"]);

    let model = read(&temp.path().join("app/Models/Generated/TestPost.php"));
    assert!(model.contains(
        "protected $fillable = ['user_id', 'title', 'content', 'is_published', 'published_at'];"
    ));
    assert!(model.contains("        'published_at' => 'datetime',\n"));

    let factory = read(&temp.path().join("database/factories/Generated/TestPostFactory.php"));
    assert!(factory.contains("            'content' => fake()->paragraph(),\n"));
    assert!(factory.contains("            'is_published' => fake()->boolean(),\n"));

    let routes = read(&temp.path().join("app/Models/Generated/GeneratedRoutes.php"));
    assert!(routes.contains(
        "Route::resource('test-users', \\App\\Http\\Controllers\\Generated\\TestUserController::class);"
    ));
}
