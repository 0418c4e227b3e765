use crate::cli::FetchArgs;
use crate::error::Result;
use crate::fetch;

pub async fn run(args: FetchArgs) -> Result<()> {
    for id in &args.ids {
        let path = fetch::download_structure(id, &args.dir, args.force).await?;
        println!("Fetched {id} -> {}", path.display());
    }
    Ok(())
}
